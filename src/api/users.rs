//! Users, friends and the authenticated user.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::api::{take_items, unwrap_field, Pagination};
use crate::auth::AuthRequirement;
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest, QueryParams};
use crate::xml::Node;

/// One page of a user's friends.
///
/// Dereferences to the users of the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FriendList {
    /// Position of this page in the full list.
    pub pagination: Pagination,
    /// The friends on this page.
    pub users: Vec<Node>,
}

impl FriendList {
    fn from_node(mut friends: Node) -> Self {
        let pagination = Pagination::from_node(&friends);
        Self {
            pagination,
            users: take_items(&mut friends, "user"),
        }
    }
}

impl Deref for FriendList {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.users
    }
}

impl GoodreadsClient {
    /// Fetches a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the user does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn user(&self, id: impl fmt::Display) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/user/show")
            .param("id", id)
            .build();
        self.execute(request).await
    }

    /// Returns the id of the user the access token belongs to.
    ///
    /// Returns `Ok(None)` if the response carries no id.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn user_id(&self) -> Result<Option<String>, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/auth_user")
            .auth(AuthRequirement::User)
            .build();
        let user = unwrap_field(self.execute(request).await?, "user");
        Ok(user.text("id").map(|id| id.trim().to_string()))
    }

    /// Fetches one page of a user's friends.
    ///
    /// `params` may carry `page` and `sort`.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::Config`] without sending anything if no
    /// access token is configured, or any other [`GoodreadsError`] raised by
    /// the call.
    pub async fn friends(
        &self,
        user_id: impl fmt::Display,
        params: QueryParams,
    ) -> Result<FriendList, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/friend/user/{user_id}"))
            .params(params)
            .auth(AuthRequirement::User)
            .build();
        let friends = unwrap_field(self.execute(request).await?, "friends");
        Ok(FriendList::from_node(friends))
    }
}
