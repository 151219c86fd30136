//! Fixture-backed catalog.
//!
//! Serves a whole catalog out of a single JSON document, standing in for the
//! remote catalog service in the CLI and in tests. Document shape:
//!
//! ```json
//! {
//!   "items":        { "ApexClass": [ { "id": "...", "developerName": "..." } ] },
//!   "dependencies": { "ApexClass": [ { "refId": "...", "dependentId": "...",
//!                                      "dependentName": "..." } ] },
//!   "access":       { "<itemId>": { "displayType": "simple", "records": [] } }
//! }
//! ```
//!
//! Unknown category keys are rejected at decode time; absent entries are
//! valid empties, not errors.

#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use metascan_api::{CatalogApi, CatalogError, CatalogResult};
use metascan_core::{AccessReport, Category, DependencyEdge, Item};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDoc {
    #[serde(default)]
    items: HashMap<Category, Vec<Item>>,
    #[serde(default)]
    dependencies: HashMap<Category, Vec<DependencyEdge>>,
    #[serde(default)]
    access: HashMap<String, AccessReport>,
}

pub struct JsonCatalog {
    doc: CatalogDoc,
}

impl JsonCatalog {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let doc: CatalogDoc =
            serde_json::from_str(json).map_err(|e| CatalogError::Decode(e.to_string()))?;
        let item_count: usize = doc.items.values().map(Vec::len).sum();
        let edge_count: usize = doc.dependencies.values().map(Vec::len).sum();
        info!(
            categories = doc.items.len(),
            items = item_count,
            edges = edge_count,
            reports = doc.access.len(),
            "catalog loaded"
        );
        Ok(Self { doc })
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

#[async_trait::async_trait]
impl CatalogApi for JsonCatalog {
    async fn list_items(&self, category: Category) -> CatalogResult<Vec<Item>> {
        Ok(self.doc.items.get(&category).cloned().unwrap_or_default())
    }

    async fn list_dependencies(&self, category: Category) -> CatalogResult<Vec<DependencyEdge>> {
        Ok(self
            .doc
            .dependencies
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_access(
        &self,
        _category: Category,
        item_id: &str,
    ) -> CatalogResult<Option<AccessReport>> {
        Ok(self.doc.access.get(item_id).cloned())
    }
}
