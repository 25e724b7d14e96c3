// ABOUTME: Normalization of raw container descriptions into display records.
// ABOUTME: Flattens command, ports and networks into the eight displayed fields.

use crate::runtime::{HostBinding, NetworkEndpoint, RawContainer};
use crate::types::ContainerId;

/// Shown in place of a missing or empty command.
pub const NO_COMMAND: &str = "N/A";

/// Flat, display-ready projection of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Short (12-character) container id.
    pub id: String,
    pub image: String,
    /// Command arguments joined by spaces, or [`NO_COMMAND`].
    pub command: String,
    pub created_at: String,
    pub status: String,
    /// Port fragments such as `80->8080, 443`. Empty when nothing is exposed.
    pub ports: String,
    pub names: String,
    /// Network names joined by `", "`. Empty when unattached.
    pub networks: String,
}

/// Why a raw description could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("port {0} has a host binding without a host port")]
    MissingHostPort(String),
}

/// Normalize one raw container description.
pub fn normalize(raw: &RawContainer) -> Result<DisplayRecord, NormalizeError> {
    let id = required(&raw.id, "Id")?;
    let image = required(&raw.image, "Image")?;
    let created_at = required(&raw.created, "Created")?;
    let status = required(&raw.status, "Status")?;
    let names = required(&raw.name, "Name")?;

    Ok(DisplayRecord {
        id: ContainerId::new(id).short().to_string(),
        image: image.to_string(),
        command: format_command(raw.command.as_deref()),
        created_at: created_at.to_string(),
        status: status.to_string(),
        ports: format_ports(&raw.ports)?,
        names: names.to_string(),
        networks: format_networks(&raw.networks),
    })
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, NormalizeError> {
    value.as_deref().ok_or(NormalizeError::MissingField(field))
}

/// Join command arguments with single spaces.
pub fn format_command(command: Option<&[String]>) -> String {
    match command {
        Some(args) if !args.is_empty() => args.join(" "),
        _ => NO_COMMAND.to_string(),
    }
}

/// Render port mappings as `"<container-port>-><host-port>"` fragments.
///
/// Published ports use the first binding's host port, exposed-only ports show
/// the container port alone, and ports with null bindings are left out.
pub fn format_ports(
    ports: &[(String, Option<Vec<HostBinding>>)],
) -> Result<String, NormalizeError> {
    let mut fragments = Vec::with_capacity(ports.len());

    for (spec, bindings) in ports {
        let Some(bindings) = bindings else {
            continue;
        };
        let port = container_port(spec);
        match bindings.first() {
            Some(binding) => {
                let host_port = binding
                    .host_port
                    .as_deref()
                    .ok_or_else(|| NormalizeError::MissingHostPort(spec.clone()))?;
                fragments.push(format!("{port}->{host_port}"));
            }
            None => fragments.push(port.to_string()),
        }
    }

    Ok(fragments.join(", "))
}

/// Join network names in the order they were reported.
pub fn format_networks(networks: &[(String, NetworkEndpoint)]) -> String {
    networks
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The port part of a `"<port>/<protocol>"` spec.
pub(crate) fn container_port(spec: &str) -> &str {
    spec.split_once('/').map_or(spec, |(port, _)| port)
}
