//! Reviews.

use std::fmt;

use crate::api::{take_items, unwrap_field};
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest};
use crate::xml::Node;

impl GoodreadsClient {
    /// Fetches the most recent reviews across the site.
    ///
    /// With `skip_cropped`, reviews whose body was truncated are dropped. The
    /// API marks a truncated body by ending it with a link to the full
    /// review, so a body containing the review's own `url` is cropped.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn recent_reviews(&self, skip_cropped: bool) -> Result<Vec<Node>, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/review/recent_reviews").build();
        let mut reviews = unwrap_field(self.execute(request).await?, "reviews");
        let mut items = take_items(&mut reviews, "review");

        if skip_cropped {
            items.retain(|review| !is_cropped(review));
        }

        Ok(items)
    }

    /// Fetches a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the review does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn review(&self, id: impl fmt::Display) -> Result<Node, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/review/show")
            .param("id", id)
            .build();
        self.execute(request).await
    }
}

fn is_cropped(review: &Node) -> bool {
    match (review.text("body"), review.text("url")) {
        (Some(body), Some(url)) => {
            let url = url.trim();
            !url.is_empty() && body.contains(url)
        }
        _ => false,
    }
}
