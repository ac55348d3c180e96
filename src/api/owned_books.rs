//! Owned-book records of the token's user.

use std::fmt;

use crate::api::{take_items, unwrap_field};
use crate::auth::AuthRequirement;
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest, QueryParams};
use crate::xml::Node;

impl GoodreadsClient {
    /// Lists the books a user owns.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn owned_books(
        &self,
        user_id: impl fmt::Display,
        page: Option<u32>,
    ) -> Result<Vec<Node>, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/owned_books/user")
            .param("id", user_id)
            .param_opt("page", page)
            .auth(AuthRequirement::User)
            .build();
        let mut owned = unwrap_field(self.execute(request).await?, "owned_books");
        Ok(take_items(&mut owned, "owned_book"))
    }

    /// Records that the token's user owns a book.
    ///
    /// `params` may carry further `owned_book[...]` fields such as
    /// `owned_book[condition_code]`. The parameters go in the query string.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn add_ownership(
        &self,
        book_id: impl fmt::Display,
        params: QueryParams,
    ) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Post, "/owned_books.xml")
            .param("owned_book[book_id]", book_id)
            .params(params)
            .auth(AuthRequirement::User)
            .build();
        let node = self.execute(request).await?;
        Ok(unwrap_field(node, "owned_book"))
    }
}
