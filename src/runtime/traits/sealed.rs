// ABOUTME: Sealed trait pattern for runtime traits.
// ABOUTME: Prevents external implementations, allowing non-breaking evolution.

/// Sealed trait to prevent external implementations.
///
/// Only types inside this crate can implement the runtime traits, so methods
/// can be added to them without breaking downstream code.
pub trait Sealed {}
