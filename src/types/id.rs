// ABOUTME: Container identifier newtype.
// ABOUTME: Wraps the full runtime id and exposes the 12-character short form.

use std::fmt;

/// Number of characters shown for a container id, matching `docker ps`.
pub const SHORT_ID_LEN: usize = 12;

/// A full container identifier as reported by the runtime.
#[must_use = "IDs reference resources and should not be ignored"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first [`SHORT_ID_LEN`] characters of the id.
    ///
    /// Ids shorter than that are returned whole.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
