//! CLI module for availability-checker
//!
//! Provides the command-line interface for running and exercising the server.

/// check subcommand
pub mod check;
/// serve subcommand
pub mod serve;

use clap::{Parser, Subcommand};

/// Availability Checker - Bounded-concurrency URL availability probe
#[derive(Parser, Debug)]
#[command(name = "availability-checker")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CHECKER_HOST                Bind address (default: 0.0.0.0)
    CHECKER_PORT                Listen port (default: 8000)
    CHECKER_MAX_BATCH_SIZE      Maximum URLs per request (default: 100)
    CHECKER_CONCURRENCY_LIMIT   Probes in flight across the server (default: 100)
    CHECKER_PROBE_TIMEOUT_MS    Per-probe timeout in milliseconds (default: 5000)
    CHECKER_LOG_LEVEL           Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the availability checker server
    Serve(serve::ServeArgs),
    /// Submit a batch of URLs to a running server
    Check(check::CheckArgs),
}
