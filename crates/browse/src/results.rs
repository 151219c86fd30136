#![forbid(unsafe_code)]

use metascan_core::Item;

/// Rows per page; fixed by contract.
pub const PAGE_SIZE: usize = 10;

/// The full item list for the active category plus the filtered, paginated
/// view over it. Filtering is a case-insensitive substring match on the
/// item's developer name; items without a name never match.
#[derive(Debug)]
pub struct ResultsState {
    items: Vec<Item>,
    search_term: String,
    page: usize,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsState {
    /// Starts empty, on page 1 (the cursor is 1-based).
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            page: 1,
        }
    }

    /// Replace the full list wholesale and rewind to the first page.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.page = 1;
    }

    /// Drop items and search term, as on a category change.
    pub fn clear(&mut self) {
        self.items.clear();
        self.search_term.clear();
        self.page = 1;
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
        self.page = 1;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    fn matches(&self, item: &Item) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        item.developer_name
            .as_deref()
            .map(|name| name.to_lowercase().contains(&self.search_term))
            .unwrap_or(false)
    }

    pub fn filtered_count(&self) -> usize {
        self.items.iter().filter(|it| self.matches(it)).count()
    }

    /// Zero when the filtered set is empty; the visible page is then empty.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE)
    }

    /// The slice of filtered items for the current page.
    pub fn visible_page(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|it| self.matches(it))
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Advance one page; no-op at the last page.
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// Retreat one page; no-op at the first page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn disable_previous(&self) -> bool {
        self.page <= 1
    }

    pub fn disable_next(&self) -> bool {
        self.page >= self.total_pages()
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Nothing in the category at all (or the fetch failed).
    pub fn show_no_data(&self) -> bool {
        self.items.is_empty()
    }

    /// Data exists but the active search term matches none of it.
    pub fn show_no_results(&self) -> bool {
        !self.items.is_empty() && !self.search_term.is_empty() && self.filtered_count() == 0
    }
}
