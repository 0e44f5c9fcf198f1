//! Server identity advertised during the initialize handshake

/// Name, version and usage hint sent in the `initialize` result.
///
/// Constructed in code and injected into the server; nothing is read from
/// the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "polar-gosling".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: Some(
                "Read-only reference data for Polar Gosling. Every tool takes no arguments \
                 and returns JSON."
                    .to_string(),
            ),
        }
    }
}

impl ServerConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}
