// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: RawContainer, HostBinding, NetworkEndpoint and RuntimeMetadata.

/// Container description as reported by the runtime, before normalization.
///
/// Scalar fields are optional because the runtime may omit any of them.
/// Ports and networks are kept as ordered pairs so that rendering follows the
/// order the runtime reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContainer {
    /// Full container ID.
    pub id: Option<String>,
    /// Image reference the container was created from.
    pub image: Option<String>,
    /// Command arguments.
    pub command: Option<Vec<String>>,
    /// Creation timestamp, as reported.
    pub created: Option<String>,
    /// Status string (e.g. "running", "exited").
    pub status: Option<String>,
    /// Container name. Docker reports it with a leading `/`.
    pub name: Option<String>,
    /// Container-side port spec (`"80/tcp"`) to host bindings.
    ///
    /// `None` means the runtime reported null for the port; `Some(vec![])`
    /// means the port is exposed but not published.
    pub ports: Vec<(String, Option<Vec<HostBinding>>)>,
    /// Network name to endpoint details.
    pub networks: Vec<(String, NetworkEndpoint)>,
}

/// A host-side binding for a container port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostBinding {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
}

impl HostBinding {
    pub fn port(host_port: impl Into<String>) -> Self {
        Self {
            host_ip: None,
            host_port: Some(host_port.into()),
        }
    }
}

/// Endpoint details for a network a container is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkEndpoint {
    pub network_id: String,
    pub ip_address: String,
    pub gateway: String,
}

/// Runtime metadata.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}
