//! Polar Gosling MCP Server
//!
//! A Model Context Protocol server that exposes Polar Gosling reference
//! data (MotherGoose, UglyFox, the Gosling CLI, the Compute Module) to
//! assistant hosts.
//!
//! # Usage
//!
//! ```bash
//! gosling-mcp
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `gosling_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdin/stdout, one message per line
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use gosling_mcp::{GoslingMcpServer, SessionEnd};

/// MCP server for Polar Gosling reference data
#[derive(Parser)]
#[command(name = "gosling-mcp")]
#[command(about = "MCP server for Polar Gosling reference data")]
#[command(version)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gosling_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    let server = GoslingMcpServer::from_reference_data()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        tools = server.registry().len(),
        "Starting gosling-mcp server"
    );

    let stats = server.run().await;
    if stats.end == SessionEnd::TransportFailed {
        tracing::warn!("Session ended by a transport failure");
    }

    Ok(())
}
