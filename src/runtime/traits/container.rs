// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List container ids and inspect them into raw descriptions.

use super::sealed::Sealed;
use super::shared_types::RawContainer;
use crate::types::ContainerId;
use async_trait::async_trait;

/// Read-only container queries.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// List container ids, including stopped containers when `all` is set.
    async fn list_container_ids(&self, all: bool) -> Result<Vec<ContainerId>, ContainerError>;

    /// Get the raw description of a container.
    async fn inspect_container(&self, id: &ContainerId) -> Result<RawContainer, ContainerError>;
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
