//! Reference data for the Polar Gosling MCP server
//!
//! Inert, read-only datasets describing the Polar Gosling GitOps runner
//! orchestration system: MotherGoose, UglyFox, the Gosling CLI and its
//! `.fly` language, the Compute Module, and cross-cutting references.
//!
//! The data is embedded at compile time and parsed once by
//! [`Datasets::load`]. Nothing here knows about the protocol that serves it.

pub mod datasets;
pub mod error;
pub mod tool;

pub use datasets::Datasets;
pub use error::{Error, Result};
pub use tool::{GoslingTool, SourceFormat};
