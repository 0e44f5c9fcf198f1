//! Parsed reference datasets

use serde_json::Value;

use crate::error::{Error, Result};
use crate::tool::{GoslingTool, SourceFormat};

/// Every [`GoslingTool`] paired with its parsed dataset.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Datasets {
    entries: Vec<(GoslingTool, Value)>,
}

impl Datasets {
    /// Parse all embedded datasets.
    ///
    /// Fails on the first embedded JSON file that does not parse.
    pub fn load() -> Result<Self> {
        let entries = GoslingTool::ALL
            .into_iter()
            .map(|tool| parse(tool).map(|value| (tool, value)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = entries.len(), "Loaded reference datasets");
        Ok(Self { entries })
    }

    /// Dataset bound to `tool`.
    pub fn get(&self, tool: GoslingTool) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tool)
            .map(|(_, value)| value)
    }

    /// Iterate tools and datasets in advertisement order.
    pub fn iter(&self) -> impl Iterator<Item = (GoslingTool, &Value)> {
        self.entries.iter().map(|(tool, value)| (*tool, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse(tool: GoslingTool) -> Result<Value> {
    match tool.source() {
        (SourceFormat::Json, text) => serde_json::from_str(text).map_err(|source| Error::Dataset {
            tool: tool.name(),
            source,
        }),
        (SourceFormat::Markdown, text) => Ok(Value::String(text.to_string())),
    }
}
