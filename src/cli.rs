// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Layout flag plus runtime connection overrides.

use clap::Parser;
use neops::runtime::{RuntimeConfig, RuntimeType};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "neops")]
#[command(about = "List Docker and Podman containers with colorized details")]
#[command(version)]
pub struct Cli {
    /// Print one line per container
    #[arg(short, long)]
    pub compact: bool,

    /// Runtime to connect to (skips socket detection)
    #[arg(long, value_enum)]
    pub runtime: Option<RuntimeType>,

    /// Path to the runtime's Unix socket
    #[arg(long, value_name = "PATH")]
    pub socket: Option<String>,

    /// Timeout for each request to the runtime, in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
