//! Dataset providers
//!
//! A [`DatasetProvider`] supplies the tool catalog and the data bound to
//! each tool. The protocol layer only sees this trait, so a different
//! backend can be served without touching transport, dispatch or registry.

use std::collections::HashMap;

use serde_json::Value;

use crate::tools::ToolDescriptor;

/// Mapping from tool name to the data value it serves
pub type DatasetBinding = HashMap<String, Value>;

/// Source of the tool catalog and its datasets.
pub trait DatasetProvider {
    /// Tools to advertise, in advertisement order.
    fn catalog(&self) -> Vec<ToolDescriptor>;

    /// Data bound to each tool name.
    fn get_all_bindings(&self) -> DatasetBinding;
}

/// In-memory provider assembled by hand.
///
/// # Example
///
/// ```
/// use gosling_mcp::{StaticProvider, ToolDescriptor};
/// use serde_json::json;
///
/// let provider = StaticProvider::new()
///     .with_tool(ToolDescriptor::new("ping", "Answer with ok"), json!({"ok": true}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    catalog: Vec<ToolDescriptor>,
    bindings: DatasetBinding,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise `descriptor` and bind `data` to its name.
    pub fn with_tool(mut self, descriptor: ToolDescriptor, data: Value) -> Self {
        self.bindings.insert(descriptor.name.clone(), data);
        self.catalog.push(descriptor);
        self
    }

    /// Advertise `descriptor` without binding any data to it.
    pub fn with_descriptor(mut self, descriptor: ToolDescriptor) -> Self {
        self.catalog.push(descriptor);
        self
    }

    /// Bind `data` to `name` without advertising it.
    pub fn with_binding(mut self, name: impl Into<String>, data: Value) -> Self {
        self.bindings.insert(name.into(), data);
        self
    }
}

impl DatasetProvider for StaticProvider {
    fn catalog(&self) -> Vec<ToolDescriptor> {
        self.catalog.clone()
    }

    fn get_all_bindings(&self) -> DatasetBinding {
        self.bindings.clone()
    }
}
