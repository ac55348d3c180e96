//! Groups.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::api::{take_items, unwrap_field, Pagination};
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest};
use crate::xml::Node;

/// Sort order used by [`GoodreadsClient::group_list`] when none is given.
pub const DEFAULT_GROUP_SORT: &str = "my_activity";

/// One page of the groups a user belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GroupList {
    /// Position of this page in the full list.
    pub pagination: Pagination,
    /// The groups on this page.
    pub groups: Vec<Node>,
}

impl GroupList {
    fn from_node(mut list: Node) -> Self {
        let pagination = Pagination::from_node(&list);
        Self {
            pagination,
            groups: take_items(&mut list, "group"),
        }
    }
}

impl Deref for GroupList {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.groups
    }
}

impl GoodreadsClient {
    /// Fetches a group by id.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the group does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn group(&self, id: impl fmt::Display) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/group/show")
            .param("id", id)
            .build();
        self.execute(request).await
    }

    /// Lists the groups a user belongs to.
    ///
    /// `sort` defaults to [`DEFAULT_GROUP_SORT`]; the API also accepts
    /// `members`, `last_activity` and `title`.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn group_list(
        &self,
        user_id: impl fmt::Display,
        sort: Option<&str>,
    ) -> Result<GroupList, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/group/list")
            .param("id", user_id)
            .param("sort", sort.unwrap_or(DEFAULT_GROUP_SORT))
            .build();
        let groups = unwrap_field(self.execute(request).await?, "groups");
        Ok(GroupList::from_node(unwrap_field(groups, "list")))
    }
}
