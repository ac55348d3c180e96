//! Endpoint methods for the Goodreads API.
//!
//! Each method on [`GoodreadsClient`](crate::GoodreadsClient) supplies a path,
//! parameters and an [`AuthRequirement`](crate::AuthRequirement), then lightly
//! reshapes the normalized [`Node`] that comes back. Fields keep the API's
//! names and are never coerced; only pagination counters are parsed.
//!
//! # Example
//!
//! ```rust,ignore
//! use goodreads_api::{GoodreadsClient, QueryParams};
//! use serde_json::json;
//!
//! let client = GoodreadsClient::from_options(Some(&json!({"api_key": "K"})))?;
//!
//! let shelf = client.shelf(1, "to-read", QueryParams::new().with("page", 2)).await?;
//! println!("{}-{} of {}", shelf.pagination.start, shelf.pagination.end, shelf.pagination.total);
//! for review in shelf.iter() {
//!     println!("{}", review["book"]["title"]);
//! }
//! ```

mod authors;
mod books;
mod groups;
mod owned_books;
mod pagination;
mod reviews;
mod series;
mod shelves;
mod users;

pub use authors::BookList;
pub use groups::{GroupList, DEFAULT_GROUP_SORT};
pub use pagination::Pagination;
pub use series::SeriesBooks;
pub use shelves::{Shelf, ShelfList};
pub use users::FriendList;

use crate::xml::Node;

/// Descends into `name` when the payload still carries that wrapper.
///
/// Envelopes with a single payload are already unwrapped by the normalizer;
/// ones with several payloads come back as a mapping.
fn unwrap_field(node: Node, name: &str) -> Node {
    match node {
        Node::Mapping(mut map) if map.contains_key(name) => map.remove(name).unwrap_or_default(),
        other => other,
    }
}

/// Moves the `name` field out of `node`, leaving nothing behind.
fn take_field(node: &mut Node, name: &str) -> Node {
    match node {
        Node::Mapping(map) => map.remove(name).unwrap_or_default(),
        _ => Node::Null,
    }
}

/// Takes the repeated `name` children of `node` as a list.
fn take_items(node: &mut Node, name: &str) -> Vec<Node> {
    take_field(node, name).into_items()
}

/// Trims the text of a field.
fn trimmed(node: &Node, name: &str) -> Option<String> {
    node.text(name).map(|text| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_unwrap_field_descends_only_when_present() {
        let node = xml::parse("<GoodreadsResponse><shelf/><reviews total=\"0\"/></GoodreadsResponse>").unwrap();
        let reviews = unwrap_field(node, "reviews");
        assert_eq!(reviews.text("total"), Some("0"));

        let node = xml::parse("<reviews total=\"3\"/>").unwrap();
        let reviews = unwrap_field(node, "reviews");
        assert_eq!(reviews.text("total"), Some("3"));
    }

    #[test]
    fn test_take_items_wraps_singletons() {
        let mut node = xml::parse("<list><book><id>1</id></book></list>").unwrap();
        let items = take_items(&mut node, "book");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text("id"), Some("1"));
        assert!(node["book"].is_null());

        let mut empty = xml::parse("<list total=\"0\"/>").unwrap();
        assert!(take_items(&mut empty, "book").is_empty());
    }

    #[test]
    fn test_trimmed() {
        let node = xml::parse("<series><title>\n  Matched\n</title></series>").unwrap();
        assert_eq!(trimmed(&node, "title").as_deref(), Some("Matched"));
        assert_eq!(trimmed(&node, "missing"), None);
    }
}
