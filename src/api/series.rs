//! Book series.

use std::fmt;

use serde::Serialize;

use crate::api::{take_field, take_items, trimmed, unwrap_field};
use crate::clients::{GoodreadsClient, GoodreadsError, HttpMethod, HttpRequest};
use crate::xml::Node;

/// A series with its works.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeriesBooks {
    /// The series title, trimmed.
    pub title: Option<String>,
    /// The number of primary works, as reported.
    pub book_count: Option<String>,
    /// The best-book title of every work, in series order.
    pub titles: Vec<String>,
    /// The `series_work` entries.
    pub works: Vec<Node>,
    /// The remaining series fields.
    pub series: Node,
}

impl SeriesBooks {
    fn from_node(mut series: Node) -> Self {
        let mut series_works = take_field(&mut series, "series_works");
        let works = take_items(&mut series_works, "series_work");
        let titles = works
            .iter()
            .filter_map(|work| work.path(&["work", "best_book", "title"]))
            .filter_map(Node::content)
            .map(|title| title.trim().to_string())
            .collect();

        Self {
            title: trimmed(&series, "title"),
            book_count: trimmed(&series, "primary_work_count"),
            titles,
            works,
            series,
        }
    }
}

impl GoodreadsClient {
    /// Lists the series an author has written for.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError`] if the call fails.
    pub async fn series_by_author(
        &self,
        author_id: impl fmt::Display,
    ) -> Result<Vec<Node>, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/series/list")
            .param("id", author_id)
            .build();
        let mut series_works = unwrap_field(self.execute(request).await?, "series_works");
        Ok(take_items(&mut series_works, "series_work"))
    }

    /// Fetches a series and the works in it.
    ///
    /// # Errors
    ///
    /// Returns [`GoodreadsError::NotFound`] if the series does not exist, or
    /// any other [`GoodreadsError`] raised by the call.
    pub async fn books_by_series(
        &self,
        id: impl fmt::Display,
    ) -> Result<SeriesBooks, GoodreadsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/series/show")
            .param("id", id)
            .build();
        let series = unwrap_field(self.execute(request).await?, "series");
        Ok(SeriesBooks::from_node(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    #[test]
    fn test_series_books_collects_titles() {
        let series = xml::parse(
            r"<series>
                <id>52928</id>
                <title>
                    Matched
                </title>
                <primary_work_count>3</primary_work_count>
                <series_works>
                    <series_work><id>206283</id><work><best_book><title>Matched (Matched, #1)</title></best_book></work></series_work>
                    <series_work><id>206284</id><work><best_book><title>Crossed (Matched, #2)</title></best_book></work></series_work>
                </series_works>
            </series>",
        )
        .unwrap();

        let books = SeriesBooks::from_node(series);
        assert_eq!(books.title.as_deref(), Some("Matched"));
        assert_eq!(books.book_count.as_deref(), Some("3"));
        assert_eq!(books.titles, vec!["Matched (Matched, #1)", "Crossed (Matched, #2)"]);
        assert_eq!(books.works.len(), 2);
        assert_eq!(books.works[0].text("id"), Some("206283"));
        assert!(books.series["series_works"].is_null());
        assert_eq!(books.series.text("id"), Some("52928"));
    }
}
