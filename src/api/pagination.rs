//! Pagination counters of list payloads.

use serde::Serialize;

use crate::xml::Node;

/// The `start`, `end` and `total` triple carried by list payloads.
///
/// `0/0/0` describes an empty list and is not an error.
///
/// # Example
///
/// ```rust
/// use goodreads_api::api::Pagination;
/// use goodreads_api::xml;
///
/// let reviews = xml::parse(r#"<reviews start="21" end="40" total="40"/>"#).unwrap();
/// let page = Pagination::from_node(&reviews);
/// assert_eq!(page, Pagination { start: 21, end: 40, total: 40 });
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based position of the first item of this page.
    pub start: u64,
    /// Position of the last item of this page.
    pub end: u64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl Pagination {
    /// Reads the counters from a list node's attributes or child fields.
    ///
    /// Missing or unparseable counters are treated as 0.
    #[must_use]
    pub fn from_node(node: &Node) -> Self {
        Self {
            start: node.parse_field("start").unwrap_or_default(),
            end: node.parse_field("end").unwrap_or_default(),
            total: node.parse_field("total").unwrap_or_default(),
        }
    }

    /// Returns `true` when the list has no items at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}
