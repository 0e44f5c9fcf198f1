//! MCP Server for Polar Gosling reference data
//!
//! This crate serves a fixed catalog of zero-argument tools over the Model
//! Context Protocol. Each tool returns a JSON snapshot of read-only
//! reference data, so an assistant host can look up how the Polar Gosling
//! system is put together.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (assistant host) ]
//!        | (JSON-RPC, one message per line over stdio)
//!        v
//! [ Transport ] --> [ Dispatcher ] --> [ ToolRegistry ]
//!                                          ^
//!                                          | catalog + bindings
//!                                   [ DatasetProvider ]
//!                                          ^
//!                                   [ gosling-data ]
//! ```
//!
//! The protocol layer only sees the [`DatasetProvider`] trait. Tests and
//! embedding hosts can serve their own data through [`StaticProvider`].
//!
//! # Methods
//!
//! - `initialize` / `notifications/initialized` - handshake
//! - `ping` - liveness check
//! - `tools/list` - the catalog, in a fixed order
//! - `tools/call` - the named dataset as pretty-printed JSON text, or
//!   `Unknown tool: <name>`

pub mod config;
pub mod datasets;
pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod registry;
pub mod server;
pub mod tools;
pub mod transport;

pub use config::ServerConfig;
pub use dispatcher::{Dispatcher, DispatcherState, canonical_text};
pub use error::{Error, ErrorKind, ProtocolError, Result};
pub use provider::{DatasetBinding, DatasetProvider, StaticProvider};
pub use registry::ToolRegistry;
pub use server::{GoslingMcpServer, SessionEnd, SessionStats};
pub use tools::{ToolContent, ToolDescriptor, ToolResult};
pub use transport::{StdioTransport, Transport};
