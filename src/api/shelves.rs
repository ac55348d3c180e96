//! Shelves: listing their books and editing them.
//!
//! Reads use the developer key. Adding and removing books acts for the
//! token's user, so those calls need an access token and fail with
//! [`ConfigError::MissingAccessToken`](crate::ConfigError::MissingAccessToken)
//! before any request is sent when none is configured.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::api::{take_items, trimmed, unwrap_field, Pagination};
use crate::auth::AuthRequirement;
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest, QueryParams};
use crate::xml::Node;

/// One page of the books on a user's shelf.
///
/// Each entry is the user's review of a book, with the book itself under
/// `book`. Dereferences to the entries of the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Shelf {
    /// Position of this page in the full shelf.
    pub pagination: Pagination,
    /// The reviews on this page.
    pub books: Vec<Node>,
}

impl Shelf {
    fn from_node(mut reviews: Node) -> Self {
        let pagination = Pagination::from_node(&reviews);
        Self {
            pagination,
            books: take_items(&mut reviews, "review"),
        }
    }
}

impl Deref for Shelf {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.books
    }
}

/// One page of a user's shelves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShelfList {
    /// Position of this page in the full list.
    pub pagination: Pagination,
    /// Shelf names, in listing order.
    pub names: Vec<String>,
    /// The `user_shelf` entries.
    pub shelves: Vec<Node>,
}

impl ShelfList {
    fn from_node(mut shelves: Node) -> Self {
        let pagination = Pagination::from_node(&shelves);
        let shelves = take_items(&mut shelves, "user_shelf");
        let names = shelves
            .iter()
            .filter_map(|shelf| trimmed(shelf, "name"))
            .collect();
        Self {
            pagination,
            names,
            shelves,
        }
    }
}

impl GoodreadsClient {
    /// Fetches one page of the books on a user's shelf.
    ///
    /// `params` may carry `page`, `per_page`, `sort` and `order`. An empty
    /// shelf yields zero books and `0/0/0` pagination.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn shelf(
        &self,
        user_id: impl fmt::Display,
        shelf: &str,
        params: QueryParams,
    ) -> Result<Shelf, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/review/list/{user_id}.xml"))
            .param("shelf", shelf)
            .param("v", 2)
            .params(params)
            .build();
        let reviews = unwrap_field(self.execute(request).await?, "reviews");
        Ok(Shelf::from_node(reviews))
    }

    /// Lists a user's shelves.
    ///
    /// `params` may carry `page`.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn list_shelves(
        &self,
        user_id: impl fmt::Display,
        params: QueryParams,
    ) -> Result<ShelfList, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/shelf/list.xml")
            .param("user_id", user_id)
            .params(params)
            .build();
        let shelves = unwrap_field(self.execute(request).await?, "shelves");
        Ok(ShelfList::from_node(shelves))
    }

    /// Adds a book to one of the token user's shelves.
    ///
    /// Returns the shelf entry the API reports back.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn add_book_to_shelf(
        &self,
        book_id: impl fmt::Display,
        shelf: &str,
    ) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
            .param("book_id", book_id)
            .param("name", shelf)
            .auth(AuthRequirement::User)
            .build();
        self.execute(request).await
    }

    /// Removes a book from one of the token user's shelves.
    ///
    /// The API answers with an empty body, which yields [`Node::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn remove_book_from_shelf(
        &self,
        book_id: impl fmt::Display,
        shelf: &str,
    ) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
            .param("book_id", book_id)
            .param("name", shelf)
            .param("a", "remove")
            .auth(AuthRequirement::User)
            .build();
        self.execute(request).await
    }

    /// Adds several books to several of the token user's shelves at once.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn add_books_to_shelves<B: fmt::Display>(
        &self,
        book_ids: &[B],
        shelves: &[&str],
    ) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/shelf/add_books_to_shelves.xml")
            .param("bookids", join(book_ids))
            .param("shelves", join(shelves))
            .auth(AuthRequirement::User)
            .build();
        self.execute(request).await
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_shelf_from_reviews() {
        let reviews = xml::parse(
            r#"<reviews start="1" end="2" total="40">
                <review><id>45590939</id><book><title>The Demon-Haunted World</title></book></review>
                <review><id>2</id><book><title>Cosmos</title></book></review>
            </reviews>"#,
        )
        .unwrap();
        let shelf = Shelf::from_node(reviews);
        assert_eq!(shelf.pagination, Pagination { start: 1, end: 2, total: 40 });
        assert_eq!(shelf.len(), 2);
        assert_eq!(shelf[0]["book"].text("title"), Some("The Demon-Haunted World"));
    }

    #[test]
    fn test_empty_shelf_has_no_books() {
        let reviews = xml::parse(r#"<reviews start="0" end="0" total="0"></reviews>"#).unwrap();
        let shelf = Shelf::from_node(reviews);
        assert!(shelf.books.is_empty());
        assert!(shelf.pagination.is_empty());
    }

    #[test]
    fn test_shelf_list_names() {
        let shelves = xml::parse(
            r#"<shelves start="1" end="2" total="2">
                <user_shelf><id type="integer">1</id><name>read</name></user_shelf>
                <user_shelf><id type="integer">2</id><name>want-to-own</name></user_shelf>
            </shelves>"#,
        )
        .unwrap();
        let list = ShelfList::from_node(shelves);
        assert_eq!(list.names, vec!["read", "want-to-own"]);
        assert_eq!(list.shelves.len(), 2);
        assert_eq!(list.pagination.total, 2);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[1_157_446, 133_376, 17_311_580]), "1157446,133376,17311580");
        assert_eq!(join(&["to-read", "want-to-own"]), "to-read,want-to-own");
        assert_eq!(join::<u64>(&[]), "");
    }
}
