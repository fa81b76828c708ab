//! Live state of one active search query.

use std::collections::HashSet;

use crate::models::MovieSummary;
use crate::traits::ResultPage;

/// The merged pages of one query, in arrival order.
///
/// Items are append-only for the lifetime of the session and never contain
/// duplicate ids; a page delivered twice merges once. A new query gets a
/// fresh session, never a merge into this one.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    page: u32,
    items: Vec<MovieSummary>,
    total_available: u32,
}

impl SearchSession {
    pub(crate) fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            items: Vec::new(),
            total_available: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last successfully merged page, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    pub fn total_available(&self) -> u32 {
        self.total_available
    }

    /// Whether every available result has been retrieved. Holds for a
    /// session whose first page never arrived (0 of 0), which keeps
    /// pagination inert after a failed search.
    pub fn exhausted(&self) -> bool {
        self.items.len() as u32 >= self.total_available
    }

    /// Merge the first page, replacing any previous contents.
    pub(crate) fn apply_first_page(&mut self, page: ResultPage) {
        self.items.clear();
        self.total_available = page.total_available;
        self.append_unique(page.items);
        self.page = 1;
    }

    /// Append a follow-up page and advance the page counter.
    pub(crate) fn apply_next_page(&mut self, page: ResultPage) {
        self.append_unique(page.items);
        self.page += 1;
    }

    fn append_unique(&mut self, items: Vec<MovieSummary>) {
        let mut seen: HashSet<String> = self.items.iter().map(|m| m.id.clone()).collect();
        for item in items {
            if seen.insert(item.id.clone()) {
                self.items.push(item);
            } else {
                tracing::debug!("Dropping duplicate result id {}", item.id);
            }
        }
    }
}
