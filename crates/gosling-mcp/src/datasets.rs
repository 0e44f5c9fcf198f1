//! Polar Gosling reference data as a [`DatasetProvider`]

use gosling_data::{Datasets, GoslingTool};

use crate::provider::{DatasetBinding, DatasetProvider};
use crate::server::GoslingMcpServer;
use crate::tools::ToolDescriptor;
use crate::Result;

impl DatasetProvider for Datasets {
    fn catalog(&self) -> Vec<ToolDescriptor> {
        GoslingTool::ALL
            .iter()
            .map(|tool| ToolDescriptor::new(tool.name(), tool.description()))
            .collect()
    }

    fn get_all_bindings(&self) -> DatasetBinding {
        self.iter()
            .map(|(tool, value)| (tool.name().to_string(), value.clone()))
            .collect()
    }
}

impl GoslingMcpServer {
    /// Load the embedded reference data and build a server over it.
    pub fn from_reference_data() -> Result<Self> {
        let datasets = Datasets::load()?;
        Self::new(&datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolRegistry;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_catalog_and_bindings_cover_the_same_names() {
        let datasets = Datasets::load().unwrap();
        let catalog: BTreeSet<String> = datasets.catalog().into_iter().map(|t| t.name).collect();
        let bound: BTreeSet<String> = datasets.get_all_bindings().into_keys().collect();
        assert_eq!(catalog, bound);
    }

    #[test]
    fn test_catalog_order_matches_tool_order() {
        let datasets = Datasets::load().unwrap();
        let names: Vec<String> = datasets.catalog().into_iter().map(|t| t.name).collect();
        let expected: Vec<String> = GoslingTool::ALL.iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_server_from_reference_data() {
        let server = GoslingMcpServer::from_reference_data().unwrap();
        assert_eq!(server.registry().len(), GoslingTool::ALL.len());
    }

    #[test]
    fn test_every_advertised_tool_resolves() {
        let datasets = Datasets::load().unwrap();
        let registry = ToolRegistry::from_provider(&datasets).unwrap();
        for descriptor in registry.list() {
            assert!(
                registry.resolve(&descriptor.name).is_ok(),
                "{} does not resolve",
                descriptor.name
            );
        }
    }
}
