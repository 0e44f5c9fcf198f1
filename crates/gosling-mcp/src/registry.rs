//! Tool registry
//!
//! Owns the ordered tool catalog and the name to dataset binding.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;

use crate::provider::{DatasetBinding, DatasetProvider};
use crate::tools::ToolDescriptor;
use crate::{Error, Result};

/// Read-only catalog of tools and the data each one serves.
///
/// Cloning is cheap and shares the underlying data, so one registry can
/// back any number of concurrently running sessions.
///
/// # Example
///
/// ```
/// use gosling_mcp::{StaticProvider, ToolDescriptor, ToolRegistry};
/// use serde_json::json;
///
/// let provider = StaticProvider::new()
///     .with_tool(ToolDescriptor::new("ping", "Answer with ok"), json!({"ok": true}));
/// let registry = ToolRegistry::from_provider(&provider).unwrap();
///
/// assert_eq!(registry.list()[0].name, "ping");
/// assert_eq!(registry.resolve("ping").unwrap(), &json!({"ok": true}));
/// assert!(registry.resolve("missing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    catalog: Arc<[ToolDescriptor]>,
    bindings: Arc<DatasetBinding>,
}

impl ToolRegistry {
    /// Build a registry from a catalog and its bindings.
    ///
    /// Fails if two descriptors share a name. Catalog entries without a
    /// binding are kept (calls to them resolve to [`Error::UnknownTool`]).
    pub fn new(catalog: Vec<ToolDescriptor>, bindings: DatasetBinding) -> Result<Self> {
        let mut seen = HashSet::with_capacity(catalog.len());
        for descriptor in &catalog {
            if !seen.insert(descriptor.name.as_str()) {
                return Err(Error::DuplicateTool(descriptor.name.clone()));
            }
            if !bindings.contains_key(&descriptor.name) {
                tracing::warn!(tool = %descriptor.name, "Tool advertised without a dataset");
            }
        }
        for name in bindings.keys() {
            if !seen.contains(name.as_str()) {
                tracing::warn!(tool = %name, "Dataset bound to a tool that is not advertised");
            }
        }

        Ok(Self {
            catalog: catalog.into(),
            bindings: Arc::new(bindings),
        })
    }

    /// Build a registry from a provider's catalog and bindings.
    pub fn from_provider(provider: &dyn DatasetProvider) -> Result<Self> {
        Self::new(provider.catalog(), provider.get_all_bindings())
    }

    /// Full catalog in advertisement order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.catalog
    }

    /// Dataset bound to `name`.
    ///
    /// Names that are not advertised, and advertised names without a
    /// dataset, both fail with [`Error::UnknownTool`].
    pub fn resolve(&self, name: &str) -> Result<&Value> {
        if !self.contains(name) {
            return Err(Error::UnknownTool(name.to_string()));
        }
        self.bindings
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))
    }

    /// Whether `name` is advertised.
    pub fn contains(&self, name: &str) -> bool {
        self.catalog.iter().any(|descriptor| descriptor.name == name)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
