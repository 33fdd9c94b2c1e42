//! Page windows and navigation link generation.

use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Relation name of the first page.
pub const REL_FIRST: &str = "first";
/// Relation name of the previous page.
pub const REL_PREV: &str = "prev";
/// Relation name of the next page.
pub const REL_NEXT: &str = "next";
/// Relation name of the last page.
pub const REL_LAST: &str = "last";

/// Navigation links of a paginated response, relation name to URL.
pub type LinksMap = HashMap<String, String>;

/// The slice of a collection a client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    pub limit: usize,
    pub offset: usize,
}

impl PageWindow {
    /// Create a page window.
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// The query suffix every URL for this page ends with.
    ///
    /// ```rust
    /// use policies_api_core::pagination::PageWindow;
    ///
    /// assert_eq!(PageWindow::new(10, 20).query_suffix(), "limit=10&offset=20");
    /// ```
    pub fn query_suffix(&self) -> String {
        format!("limit={}&offset={}", self.limit, self.offset)
    }
}

impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_suffix())
    }
}

/// Builds the navigation links a listing endpoint returns.
///
/// Every generated URL places `limit` and `offset` as its last two query
/// parameters, in that order, so the links always satisfy
/// [`validate`](crate::pagination::validate).
#[derive(Debug, Clone)]
pub struct PaginationLinks {
    base: String,
    window: PageWindow,
    total: usize,
}

impl PaginationLinks {
    /// Describe the page `window` of a collection of `total` entries served
    /// at `base`. `base` may already carry query parameters such as filters.
    pub fn new(base: impl Into<String>, window: PageWindow, total: usize) -> Self {
        Self {
            base: base.into(),
            window,
            total,
        }
    }

    /// Convenience wrapper returning the links map directly.
    pub fn build(base: &str, window: PageWindow, total: usize) -> LinksMap {
        Self::new(base, window, total).to_links()
    }

    /// Window of the first page.
    pub fn first(&self) -> PageWindow {
        PageWindow::new(self.window.limit, 0)
    }

    /// Window of the previous page, if the current page is not the first.
    pub fn prev(&self) -> Option<PageWindow> {
        (self.window.offset > 0 && self.window.limit > 0).then(|| {
            PageWindow::new(
                self.window.limit,
                self.window.offset.saturating_sub(self.window.limit),
            )
        })
    }

    /// Window of the next page, if entries remain after the current one.
    pub fn next(&self) -> Option<PageWindow> {
        let end = self.window.offset.saturating_add(self.window.limit);
        (self.window.limit > 0 && end < self.total)
            .then(|| PageWindow::new(self.window.limit, end))
    }

    /// Window of the last page.
    pub fn last(&self) -> PageWindow {
        let limit = self.window.limit;
        let offset = if limit == 0 || self.total == 0 {
            0
        } else {
            ((self.total - 1) / limit) * limit
        };
        PageWindow::new(limit, offset)
    }

    /// URL for the given page.
    pub fn url_for(&self, window: PageWindow) -> String {
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base, separator, window.query_suffix())
    }

    /// All applicable links keyed by relation.
    pub fn to_links(&self) -> LinksMap {
        let mut links = LinksMap::new();
        links.insert(REL_FIRST.to_string(), self.url_for(self.first()));
        if let Some(prev) = self.prev() {
            links.insert(REL_PREV.to_string(), self.url_for(prev));
        }
        if let Some(next) = self.next() {
            links.insert(REL_NEXT.to_string(), self.url_for(next));
        }
        links.insert(REL_LAST.to_string(), self.url_for(self.last()));
        trace!(
            "Built {} links for {} ({} of {})",
            links.len(),
            self.base,
            self.window,
            self.total
        );
        links
    }
}

/// Extract the `links` object of a listing response.
///
/// Entries whose value is not a string are skipped; a response without a
/// `links` object yields an empty map.
pub fn extract_links(response: &Value) -> LinksMap {
    response
        .get("links")
        .and_then(Value::as_object)
        .map(|links| {
            links
                .iter()
                .filter_map(|(rel, url)| url.as_str().map(|url| (rel.clone(), url.to_string())))
                .collect()
        })
        .unwrap_or_default()
}
