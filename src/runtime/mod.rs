// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detects the local socket, connects through bollard and exposes capability traits.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::{BollardRuntime, connect, raw_from_inspect};
pub use detection::{DetectionError, detect_local, resolve_runtime};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use traits::*;
pub use types::{DetectedRuntime, RuntimeConfig, RuntimeType};
