//! Authors and their books.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::api::{take_field, take_items, unwrap_field, Pagination};
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest, QueryParams};
use crate::xml::Node;

/// One page of an author's books.
///
/// Dereferences to the books of the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookList {
    /// Position of this page in the full list.
    pub pagination: Pagination,
    /// The books on this page.
    pub books: Vec<Node>,
}

impl BookList {
    fn from_node(mut author: Node) -> Self {
        let mut books = take_field(&mut author, "books");
        let pagination = Pagination::from_node(&books);
        Self {
            pagination,
            books: take_items(&mut books, "book"),
        }
    }
}

impl Deref for BookList {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.books
    }
}

impl GoodreadsClient {
    /// Fetches an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the author does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn author(&self, id: impl fmt::Display) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/author/show")
            .param("id", id)
            .build();
        self.execute(request).await
    }

    /// Looks up an author by name.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn author_by_name(&self, name: &str) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/author_url")
            .param("id", name)
            .build();
        let node = self.execute(request).await?;
        Ok(unwrap_field(node, "author"))
    }

    /// Fetches one page of an author's books.
    ///
    /// `params` may carry `page`.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn books_by_author(
        &self,
        id: impl fmt::Display,
        params: QueryParams,
    ) -> Result<BookList, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/author/list")
            .param("id", id)
            .params(params)
            .build();
        let author = unwrap_field(self.execute(request).await?, "author");
        Ok(BookList::from_node(author))
    }
}
