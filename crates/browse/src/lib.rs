//! Headless browser state machine for the metadata catalog.
//!
//! `Browser` is the view controller: it owns the selection, the result set
//! and the two detail loaders, and wires user actions to the catalog behind
//! `Arc<dyn CatalogApi>`. Fetches run as spawned tasks that post
//! [`CatalogUpdate`] messages back over an in-process channel;
//! [`Browser::process_updates`] drains the channel and applies each message
//! only if its captured category/target still matches the live selection.
//! There is no cancellation: a superseded fetch runs to completion and its
//! result dies at the relevance guard.

#![forbid(unsafe_code)]

use std::sync::mpsc;
use std::sync::Arc;

use metrics::counter;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use metascan_api::CatalogApi;
use metascan_core::{access, Category, DependencyEdge, RenderedAccessReport};

mod loader;
mod model;
mod results;

pub use loader::{DetailLoader, LoadPhase};
pub use model::{CatalogUpdate, SelectionState};
pub use results::{ResultsState, PAGE_SIZE};

pub struct Browser {
    api: Arc<dyn CatalogApi>,
    selection: SelectionState,
    results: ResultsState,
    dependencies: DetailLoader<Vec<DependencyEdge>>,
    access: DetailLoader<RenderedAccessReport>,
    updates_tx: mpsc::Sender<CatalogUpdate>,
    updates_rx: mpsc::Receiver<CatalogUpdate>,
    // last category an item fetch was spawned for; compared against the live
    // selection so each category change triggers exactly one fetch
    loaded_category: Option<Category>,
    tasks: Vec<JoinHandle<()>>,
}

impl Browser {
    /// Create a browser over `api` and start loading the default category.
    /// Must be called from within a Tokio runtime.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        let (updates_tx, updates_rx) = mpsc::channel();
        let mut this = Self {
            api,
            selection: SelectionState::default(),
            results: ResultsState::new(),
            dependencies: DetailLoader::new(),
            access: DetailLoader::new(),
            updates_tx,
            updates_rx,
            loaded_category: None,
            tasks: Vec::new(),
        };
        this.ensure_items_for_selection();
        this
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn dependencies(&self) -> &DetailLoader<Vec<DependencyEdge>> {
        &self.dependencies
    }

    pub fn access(&self) -> &DetailLoader<RenderedAccessReport> {
        &self.access
    }

    /// Switch the browsed category. No-op when unchanged; otherwise every
    /// piece of downstream state is reset and a fresh item fetch starts.
    pub fn select_category(&mut self, category: Category) {
        if self.selection.category == category {
            return;
        }
        info!(category = %category, "category selected");
        self.selection = SelectionState {
            category,
            selected_item_id: None,
        };
        self.results.clear();
        self.dependencies.close();
        self.access.close();
        self.ensure_items_for_selection();
    }

    fn ensure_items_for_selection(&mut self) {
        if self.loaded_category == Some(self.selection.category) {
            return;
        }
        self.loaded_category = Some(self.selection.category);
        let category = self.selection.category;
        let api = self.api.clone();
        let tx = self.updates_tx.clone();
        self.tasks.push(tokio::spawn(async move {
            match api.list_items(category).await {
                Ok(items) => {
                    info!(category = %category, count = items.len(), "items: fetch completed");
                    let _ = tx.send(CatalogUpdate::Items { category, items });
                }
                Err(e) => {
                    warn!(category = %category, error = %e, "items: fetch failed");
                    let _ = tx.send(CatalogUpdate::ItemsError { category });
                }
            }
        }));
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.results.set_search_term(term);
    }

    pub fn next_page(&mut self) {
        self.results.next_page();
    }

    pub fn prev_page(&mut self) {
        self.results.prev_page();
    }

    /// Open a row: remember the selection and load what depends on it. The
    /// edge list is fetched for the whole category and filtered here by the
    /// captured target id.
    pub fn open_item(&mut self, item_id: &str) {
        if item_id.is_empty() {
            return;
        }
        self.selection.selected_item_id = Some(item_id.to_string());
        self.dependencies.open(item_id);
        let category = self.selection.category;
        let target = item_id.to_string();
        let api = self.api.clone();
        let tx = self.updates_tx.clone();
        self.tasks.push(tokio::spawn(async move {
            match api.list_dependencies(category).await {
                Ok(edges) => {
                    let edges: Vec<DependencyEdge> =
                        edges.into_iter().filter(|e| e.ref_id == target).collect();
                    info!(category = %category, item = %target, count = edges.len(),
                        "dependencies: fetch completed");
                    let _ = tx.send(CatalogUpdate::Dependencies {
                        item_id: target,
                        edges,
                    });
                }
                Err(e) => {
                    warn!(category = %category, item = %target, error = %e,
                        "dependencies: fetch failed");
                    let _ = tx.send(CatalogUpdate::DependenciesError { item_id: target });
                }
            }
        }));
    }

    /// Load the access matrix for an item. Independent of [`open_item`]: the
    /// two views neither share state nor close each other.
    pub fn show_access(&mut self, item_id: &str) {
        if item_id.is_empty() || !self.show_access_button() {
            return;
        }
        self.access.open(item_id);
        let category = self.selection.category;
        let target = item_id.to_string();
        let api = self.api.clone();
        let tx = self.updates_tx.clone();
        self.tasks.push(tokio::spawn(async move {
            match api.get_access(category, &target).await {
                Ok(report) => {
                    let report = report.map(|r| access::normalize(&r));
                    info!(category = %category, item = %target,
                        empty = report.as_ref().map_or(true, |r| r.is_empty()),
                        "access: fetch completed");
                    let _ = tx.send(CatalogUpdate::Access {
                        item_id: target,
                        report,
                    });
                }
                Err(e) => {
                    warn!(category = %category, item = %target, error = %e,
                        "access: fetch failed");
                    let _ = tx.send(CatalogUpdate::AccessError { item_id: target });
                }
            }
        }));
    }

    pub fn close_dependencies(&mut self) {
        self.dependencies.close();
    }

    pub fn close_access(&mut self) {
        self.access.close();
    }

    /// Drain completed fetch messages and fold them into the state. Each
    /// message is applied only when its captured category or target id still
    /// matches; everything else is discarded here.
    pub fn process_updates(&mut self) {
        let mut discarded: u64 = 0;
        while let Ok(update) = self.updates_rx.try_recv() {
            match update {
                CatalogUpdate::Items { category, items } => {
                    if category == self.selection.category {
                        self.results.set_items(items);
                    } else {
                        info!(category = %category, "items: stale snapshot discarded");
                        discarded += 1;
                    }
                }
                CatalogUpdate::ItemsError { category } => {
                    if category == self.selection.category {
                        self.results.set_items(Vec::new());
                    } else {
                        discarded += 1;
                    }
                }
                CatalogUpdate::Dependencies { item_id, edges } => {
                    if !self.dependencies.resolve(&item_id, Some(edges)) {
                        info!(item = %item_id, "dependencies: stale result discarded");
                        discarded += 1;
                    }
                }
                CatalogUpdate::DependenciesError { item_id } => {
                    if !self.dependencies.fail(&item_id) {
                        discarded += 1;
                    }
                }
                CatalogUpdate::Access { item_id, report } => {
                    if !self.access.resolve(&item_id, report) {
                        info!(item = %item_id, "access: stale result discarded");
                        discarded += 1;
                    }
                }
                CatalogUpdate::AccessError { item_id } => {
                    if !self.access.fail(&item_id) {
                        discarded += 1;
                    }
                }
            }
        }
        if discarded > 0 {
            counter!("browse_stale_results_discarded", discarded);
        }
        self.tasks.retain(|t| !t.is_finished());
    }

    /// Await every in-flight fetch, then fold in all queued messages. Stale
    /// results still go through the relevance guards; this only removes the
    /// waiting.
    pub async fn settle(&mut self) {
        for task in std::mem::take(&mut self.tasks) {
            let _ = task.await;
        }
        self.process_updates();
    }

    /// The access action is offered only for categories with direct access
    /// semantics.
    pub fn show_access_button(&self) -> bool {
        self.selection.category.supports_access_report()
    }

    pub fn has_no_dependencies(&self) -> bool {
        !self.dependencies.is_loading()
            && self.dependencies.data().map_or(true, |d| d.is_empty())
    }

    pub fn has_no_access(&self) -> bool {
        !self.access.is_loading() && self.access.data().map_or(true, |r| r.is_empty())
    }
}
