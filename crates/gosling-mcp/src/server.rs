//! MCP Server implementation
//!
//! Wires a [`Transport`] and a [`Dispatcher`] to a shared [`ToolRegistry`]
//! and runs the read, dispatch, write cycle until the input closes.

use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::provider::DatasetProvider;
use crate::registry::ToolRegistry;
use crate::transport::{StdioTransport, Transport};
use crate::Result;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input stream was closed by the host.
    EndOfStream,
    /// Reading or writing the byte stream failed.
    TransportFailed,
}

/// Counters for one served session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames read from the input stream.
    pub frames: usize,
    /// Responses written to the output stream.
    pub responses: usize,
    pub end: SessionEnd,
}

/// MCP Server for Polar Gosling reference data
///
/// # Example
///
/// ```ignore
/// use gosling_mcp::{GoslingMcpServer, StaticProvider};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = GoslingMcpServer::new(&StaticProvider::new())?;
///     server.run().await;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GoslingMcpServer {
    registry: ToolRegistry,
    config: ServerConfig,
}

impl GoslingMcpServer {
    /// Create a server serving `provider`'s catalog with the default identity.
    pub fn new(provider: &dyn DatasetProvider) -> Result<Self> {
        Ok(Self::with_registry(
            ToolRegistry::from_provider(provider)?,
            ServerConfig::default(),
        ))
    }

    pub fn with_registry(registry: ToolRegistry, config: ServerConfig) -> Self {
        Self { registry, config }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// A fresh dispatcher for one session.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.registry.clone(), self.config.clone())
    }

    /// Serve one session over stdin/stdout.
    pub async fn run(&self) -> SessionStats {
        tracing::info!(tools = self.registry.len(), "MCP server ready, listening on stdio");
        self.serve(StdioTransport::stdio()).await
    }

    /// Serve one session over `transport` until its input closes.
    ///
    /// A transport failure ends the session without panicking; the returned
    /// stats say which way it ended.
    pub async fn serve<R, W>(&self, mut transport: Transport<R, W>) -> SessionStats
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut dispatcher = self.dispatcher();
        let mut frames = 0;
        let mut responses = 0;

        let end = loop {
            let frame = match transport.read_frame().await {
                Ok(Some(frame)) => frame,
                Ok(None) => break SessionEnd::EndOfStream,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read from transport");
                    break SessionEnd::TransportFailed;
                }
            };
            frames += 1;

            let Some(response) = dispatcher.handle_frame(&frame) else {
                continue;
            };

            if let Err(e) = transport.write_frame(&response).await {
                tracing::warn!(error = %e, "Failed to write response");
                break SessionEnd::TransportFailed;
            }
            responses += 1;
        };

        dispatcher.close();
        tracing::info!(frames, responses, end = ?end, "MCP session closed");

        SessionStats {
            frames,
            responses,
            end,
        }
    }
}
