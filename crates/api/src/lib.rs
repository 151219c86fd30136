//! Metascan catalog contract (in-process).
//!
//! This crate defines the trait and error types frontends depend on. The
//! implementation can be in-process (fixture-backed) or remote; callers only
//! see the seam.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use metascan_core::{AccessReport, Category, DependencyEdge, Item};

/// API errors suitable for transport over RPC later.
#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
pub enum CatalogError {
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Declarative catalog surface.
///
/// All three operations are scoped to one category; dependency edges are
/// listed for the whole category and filtered client-side, never per item.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Full item list for a category.
    async fn list_items(&self, category: Category) -> CatalogResult<Vec<Item>>;

    /// Full dependency-edge list for a category.
    async fn list_dependencies(&self, category: Category) -> CatalogResult<Vec<DependencyEdge>>;

    /// Access report for one item; `None` when the service has nothing to say.
    async fn get_access(
        &self,
        category: Category,
        item_id: &str,
    ) -> CatalogResult<Option<AccessReport>>;
}
