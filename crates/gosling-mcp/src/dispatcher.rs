//! Protocol state machine
//!
//! Decodes one frame at a time, routes it to the [`ToolRegistry`] and builds
//! the response envelope. Every decode or dispatch failure is turned into an
//! error envelope here; nothing escapes to the serve loop.
//!
//! ```text
//! Uninitialized --initialize--> Ready --end of stream / write failure--> Closed
//! ```

use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::error::ProtocolError;
use crate::protocol::{
    InitializeParams, InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities,
    ServerInfo, ToolCallParams, ToolsCapability,
};
use crate::registry::ToolRegistry;
use crate::tools::{ToolDescriptor, ToolResult};

type DispatchResult = std::result::Result<Value, ProtocolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    /// Waiting for the `initialize` handshake.
    Uninitialized,
    /// Handshake done; tool requests are served.
    Ready,
    /// The session is over; further frames are ignored.
    Closed,
}

/// Per-session protocol state machine.
///
/// Requests are handled strictly one at a time: the caller must write the
/// response for frame *n* before passing frame *n + 1*.
#[derive(Debug)]
pub struct Dispatcher {
    registry: ToolRegistry,
    config: ServerConfig,
    state: DispatcherState,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry, config: ServerConfig) -> Self {
        Self {
            registry,
            config,
            state: DispatcherState::Uninitialized,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Move to [`DispatcherState::Closed`].
    pub fn close(&mut self) {
        if self.state != DispatcherState::Closed {
            tracing::debug!(from = ?self.state, "Dispatcher closed");
        }
        self.state = DispatcherState::Closed;
    }

    /// Handle one raw frame.
    ///
    /// Returns the response to write, or `None` for notifications and for
    /// frames received after the dispatcher was closed.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Option<JsonRpcResponse> {
        if self.state == DispatcherState::Closed {
            return None;
        }

        let request = match JsonRpcRequest::decode(frame) {
            Ok(request) => request,
            Err((id, error)) => {
                tracing::warn!(id = ?id, error = %error, "Rejected malformed message");
                return Some(JsonRpcResponse::error(id, &error));
            }
        };

        tracing::debug!(id = ?request.id, method = %request.method, "Received message");

        let JsonRpcRequest {
            id, method, params, ..
        } = request;
        let outcome = self.dispatch(&method, params);

        let Some(id) = id else {
            if let Err(error) = outcome {
                tracing::debug!(method = %method, error = %error, "Dropped notification");
            }
            return None;
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(Some(id), result),
            Err(error) => {
                tracing::debug!(method = %method, error = %error, "Request failed");
                JsonRpcResponse::error(Some(id), &error)
            }
        })
    }

    fn dispatch(&mut self, method: &str, params: Value) -> DispatchResult {
        match method {
            "initialize" => self.handle_initialize(params),
            "notifications/initialized" | "initialized" | "notifications/cancelled" => {
                Ok(json!({}))
            }
            "ping" => Ok(json!({})),
            "tools/list" => {
                self.require_ready()?;
                Ok(json!({ "tools": self.list_tools() }))
            }
            "tools/call" => {
                self.require_ready()?;
                self.handle_tools_call(params)
            }
            _ => Err(ProtocolError::MethodNotFound(method.to_string())),
        }
    }

    fn require_ready(&self) -> std::result::Result<(), ProtocolError> {
        match self.state {
            DispatcherState::Ready => Ok(()),
            _ => Err(ProtocolError::NotInitialized),
        }
    }

    fn handle_initialize(&mut self, params: Value) -> DispatchResult {
        let params: InitializeParams = if params.is_null() {
            InitializeParams::default()
        } else {
            serde_json::from_value(params).map_err(|e| ProtocolError::InvalidParams(e.to_string()))?
        };

        let protocol_version = params.negotiated_version().to_string();
        tracing::info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()).unwrap_or("unknown"),
            requested = ?params.protocol_version,
            protocol_version = %protocol_version,
            "Initialize handshake"
        );

        let result = InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
            instructions: self.config.instructions.clone(),
        };

        self.state = DispatcherState::Ready;
        serde_json::to_value(result).map_err(|e| ProtocolError::Internal(e.to_string()))
    }

    fn handle_tools_call(&self, params: Value) -> DispatchResult {
        let params: ToolCallParams =
            serde_json::from_value(params).map_err(|e| ProtocolError::InvalidParams(e.to_string()))?;

        let result = self.call_tool(&params.name)?;
        serde_json::to_value(result).map_err(|e| ProtocolError::Internal(e.to_string()))
    }

    /// Catalog advertised by `tools/list`.
    pub fn list_tools(&self) -> &[ToolDescriptor] {
        self.registry.list()
    }

    /// Resolve `name` and render it as a single text block.
    ///
    /// An unknown tool is a normal outcome: the text is
    /// `Unknown tool: <name>`.
    pub fn call_tool(&self, name: &str) -> std::result::Result<ToolResult, ProtocolError> {
        match self.registry.resolve(name) {
            Ok(data) => canonical_text(data)
                .map(ToolResult::text)
                .map_err(|e| ProtocolError::Internal(e.to_string())),
            Err(e) => {
                tracing::debug!(tool = %name, "Call to unknown tool");
                Ok(ToolResult::text(e.to_string()))
            }
        }
    }
}

/// Canonical text form of a dataset: two-space indented JSON, keys in the
/// order the dataset was authored.
pub fn canonical_text(data: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}
