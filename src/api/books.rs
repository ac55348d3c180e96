//! Book lookups and search.

use std::fmt;

use crate::api::unwrap_field;
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest, QueryParams};
use crate::xml::Node;

impl GoodreadsClient {
    /// Fetches a book by its Goodreads id.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the book does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn book(&self, id: impl fmt::Display) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/book/show")
            .param("id", id)
            .build();
        self.execute(request).await
    }

    /// Fetches a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if no book has this ISBN, or any
    /// other [`GoodreadsError`] raised by the call.
    pub async fn book_by_isbn(&self, isbn: &str) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/book/isbn")
            .param("isbn", isbn)
            .build();
        self.execute(request).await
    }

    /// Fetches the best match for a title.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn book_by_title(&self, title: &str) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/book/title")
            .param("title", title)
            .build();
        self.execute(request).await
    }

    /// Searches books by title, author or ISBN.
    ///
    /// `params` may carry `page` or `search[field]`. The result keeps the
    /// API's shape: `query`, `total_results` and `results.work`.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn search_books(
        &self,
        query: &str,
        params: QueryParams,
    ) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/search/index")
            .param("q", query)
            .params(params)
            .build();
        let node = self.execute(request).await?;
        Ok(unwrap_field(node, "search"))
    }
}
