#![forbid(unsafe_code)]

use metascan_core::{Category, DependencyEdge, Item, RenderedAccessReport};

/// Messages posted by fetch tasks back to the controller.
///
/// Every variant carries the category or target id captured when the fetch
/// was issued; the controller compares it against the live selection before
/// applying, and discards on mismatch.
#[derive(Debug)]
pub enum CatalogUpdate {
    Items {
        category: Category,
        items: Vec<Item>,
    },
    ItemsError {
        category: Category,
    },
    Dependencies {
        item_id: String,
        edges: Vec<DependencyEdge>,
    },
    DependenciesError {
        item_id: String,
    },
    Access {
        item_id: String,
        report: Option<RenderedAccessReport>,
    },
    AccessError {
        item_id: String,
    },
}

/// Current browsing position: the active category and, once a row has been
/// opened, the selected item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub category: Category,
    pub selected_item_id: Option<String>,
}
