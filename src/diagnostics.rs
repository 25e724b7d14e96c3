// ABOUTME: Diagnostics accumulator for non-fatal warnings while listing containers.
// ABOUTME: Collects per-container failures that skip a record without failing the listing.

use std::fmt;

/// Collects non-fatal warnings during a listing.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(
            container = %warning.container,
            kind = ?warning.kind,
            "{}",
            warning.reason
        );
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A container left out of the listing, and why.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    /// Short id of the skipped container.
    pub container: String,
    pub reason: String,
}

impl Warning {
    /// The runtime listed the container but could not inspect it.
    pub fn inspect_failed(container: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(WarningKind::InspectFailed, container, reason)
    }

    /// The container's description lacked something needed for display.
    pub fn malformed_record(container: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(WarningKind::MalformedRecord, container, reason)
    }

    fn new(kind: WarningKind, container: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            container: container.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipping container {}: {}", self.container, self.reason)
    }
}

/// Categories of warnings that can occur while listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// The runtime could not inspect a listed container (it may have been removed).
    InspectFailed,
    /// The runtime's description lacked a field needed for display.
    MalformedRecord,
}
