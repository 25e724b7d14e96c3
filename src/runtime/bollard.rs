// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::detection::resolve_runtime;
use crate::runtime::error::{ConnectionSnafu, DetectionSnafu, RuntimeError};
use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{
    ContainerError, ContainerOps, HostBinding, NetworkEndpoint, RawContainer, RuntimeInfo,
    RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::types::{DetectedRuntime, RuntimeConfig, RuntimeType};
use crate::types::ContainerId;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ContainerInspectResponse, EndpointSettings, PortBinding};
use bollard::query_parameters::{InspectContainerOptions, ListContainersOptions};
use snafu::ResultExt;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_container_not_found_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_container_list_error(e: bollard::errors::Error) -> ContainerError {
    ContainerError::Runtime(e.to_string())
}

/// A runtime that answered with an error status is reachable; anything else is not.
fn map_runtime_info_error(e: bollard::errors::Error) -> RuntimeInfoError {
    match e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } => RuntimeInfoError::Runtime(format!("{status_code}: {message}")),
        other => RuntimeInfoError::ConnectionFailed(other.to_string()),
    }
}

// =============================================================================
// BollardRuntime Implementation
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Build a client for a resolved runtime socket.
    ///
    /// Every request made through the client is bounded by `timeout`. No
    /// request is sent here; use [`connect`] to also verify the runtime answers.
    pub fn connect(info: &DetectedRuntime, timeout: Duration) -> Result<Self, RuntimeInfoError> {
        let client = Docker::connect_with_unix(
            &info.socket_path,
            timeout.as_secs(),
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }

    /// Get the runtime type.
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }
}

/// Resolve, connect to and ping the local container runtime.
pub async fn connect(
    config: &RuntimeConfig,
    timeout: Duration,
) -> Result<BollardRuntime, RuntimeError> {
    let detected = resolve_runtime(config).context(DetectionSnafu)?;
    debug!(
        runtime = %detected.runtime_type,
        socket = %detected.socket_path,
        "resolved runtime socket"
    );

    let runtime = BollardRuntime::connect(&detected, timeout).context(ConnectionSnafu)?;
    runtime.ping().await.context(ConnectionSnafu)?;

    Ok(runtime)
}

// =============================================================================
// Inspect Conversion
// =============================================================================

/// Convert an inspect response into a [`RawContainer`].
///
/// bollard decodes port and network maps into `HashMap`s; the daemon sends
/// them with sorted keys, so entries are sorted by key here to keep that order.
pub fn raw_from_inspect(details: ContainerInspectResponse) -> RawContainer {
    let (image, command) = match details.config {
        Some(config) => (config.image, config.cmd),
        None => (None, None),
    };

    let status = details
        .state
        .and_then(|s| s.status)
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty());

    let (ports, networks) = match details.network_settings {
        Some(settings) => (
            ordered_ports(settings.ports),
            ordered_networks(settings.networks),
        ),
        None => (Vec::new(), Vec::new()),
    };

    RawContainer {
        id: details.id,
        image,
        command,
        created: details.created.map(|dt| dt.to_string()),
        status,
        name: details.name,
        ports,
        networks,
    }
}

fn ordered_ports(
    ports: Option<HashMap<String, Option<Vec<PortBinding>>>>,
) -> Vec<(String, Option<Vec<HostBinding>>)> {
    let mut entries: Vec<_> = ports
        .unwrap_or_default()
        .into_iter()
        .map(|(spec, bindings)| {
            let bindings = bindings.map(|list| {
                list.into_iter()
                    .map(|b| HostBinding {
                        host_ip: b.host_ip,
                        host_port: b.host_port,
                    })
                    .collect()
            });
            (spec, bindings)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

fn ordered_networks(
    networks: Option<HashMap<String, EndpointSettings>>,
) -> Vec<(String, NetworkEndpoint)> {
    let mut entries: Vec<_> = networks
        .unwrap_or_default()
        .into_iter()
        .map(|(name, endpoint)| {
            (
                name,
                NetworkEndpoint {
                    network_id: endpoint.network_id.unwrap_or_default(),
                    ip_address: endpoint.ip_address.unwrap_or_default(),
                    gateway: endpoint.gateway.unwrap_or_default(),
                },
            )
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

// Implement Sealed trait to allow runtime trait implementations
impl Sealed for BollardRuntime {}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client
            .info()
            .await
            .map_err(map_runtime_info_error)?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            api_version: bollard::API_DEFAULT_VERSION.to_string(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(map_runtime_info_error)?;
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_container_ids(&self, all: bool) -> Result<Vec<ContainerId>, ContainerError> {
        let opts = ListContainersOptions {
            all,
            ..Default::default()
        };

        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(map_container_list_error)?;

        Ok(containers
            .into_iter()
            .filter_map(|c| c.id)
            .map(ContainerId::new)
            .collect())
    }

    async fn inspect_container(&self, id: &ContainerId) -> Result<RawContainer, ContainerError> {
        let details = self
            .client
            .inspect_container(id.as_str(), None::<InspectContainerOptions>)
            .await
            .map_err(map_container_not_found_error)?;

        Ok(raw_from_inspect(details))
    }
}
