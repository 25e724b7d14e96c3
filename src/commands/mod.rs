// ABOUTME: Command module aggregator for the neops CLI.
// ABOUTME: Re-exports the list command handler.

mod list;
mod runtime_connection;

pub use list::list;
