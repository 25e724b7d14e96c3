// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ContainerOps and RuntimeInfo plus the types they exchange.

mod container;
mod runtime_info;
pub(crate) mod sealed;
mod shared_types;

pub use container::{ContainerError, ContainerOps};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;
