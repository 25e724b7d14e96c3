// ABOUTME: Application-wide error types for neops.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runtime::{ContainerError, RuntimeError, RuntimeErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create client: {0}")]
    Client(#[from] RuntimeError),

    #[error("failed to list containers: {0}")]
    List(#[from] ContainerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A suggestion for fixing the failure, when there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        let Error::Client(e) = self else {
            return None;
        };
        match e.kind() {
            RuntimeErrorKind::NoRuntimeFound => {
                Some("start Docker or Podman, or point --socket at a running daemon")
            }
            RuntimeErrorKind::ConnectionFailed => {
                Some("check that the daemon is running and its socket is readable")
            }
            RuntimeErrorKind::RuntimeOperation => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
