// ABOUTME: Library root for neops - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod diagnostics;
pub mod error;
pub mod listing;
pub mod output;
pub mod records;
pub mod runtime;
pub mod style;
pub mod types;
