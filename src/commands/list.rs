// ABOUTME: List command implementation.
// ABOUTME: Connects, collects every container's display record and renders them.

use super::runtime_connection::connect_to_runtime;
use neops::diagnostics::Diagnostics;
use neops::error::Result;
use neops::listing::collect_records;
use neops::output::Output;
use neops::runtime::RuntimeConfig;
use std::time::Duration;

/// List all containers, running and stopped.
///
/// Containers that had to be skipped are reported after the rendered rows.
pub async fn list(config: &RuntimeConfig, timeout: Duration, output: &Output) -> Result<()> {
    let runtime = connect_to_runtime(config, timeout).await?;

    let mut diag = Diagnostics::default();
    let records = collect_records(&runtime, true, &mut diag).await?;

    output.render(&records)?;

    for warning in diag.warnings() {
        output.warning(&warning.to_string());
    }

    Ok(())
}
