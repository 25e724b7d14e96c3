// ABOUTME: Shared helper for connecting to the local container runtime.
// ABOUTME: Resolves the socket, pings the runtime and logs its version.

use neops::error::Result;
use neops::runtime::{BollardRuntime, RuntimeConfig, RuntimeInfo, connect};
use std::time::Duration;
use tracing::debug;

/// Connect to the container runtime described by `config`.
///
/// The runtime must answer a ping; version metadata is only logged, and a
/// failure to fetch it does not fail the connection.
pub async fn connect_to_runtime(
    config: &RuntimeConfig,
    timeout: Duration,
) -> Result<BollardRuntime> {
    let runtime = connect(config, timeout).await?;

    match runtime.info().await {
        Ok(meta) => debug!(
            runtime = %meta.name,
            version = %meta.version,
            api = %meta.api_version,
            os = %meta.os,
            arch = %meta.arch,
            "connected to runtime"
        ),
        Err(e) => debug!(runtime = %runtime.runtime_type(), error = %e, "runtime info unavailable"),
    }

    Ok(runtime)
}
