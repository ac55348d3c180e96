//! The generic, navigable tree produced by the XML normalizer.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::Serialize;

/// Key under which an element's text is stored when the element also has
/// data attributes.
pub const TEXT_KEY: &str = "__content__";

static NULL: Node = Node::Null;

/// A normalized XML value.
///
/// Repeated sibling elements collapse into a [`Node::Sequence`]; a lone
/// element stays a scalar or mapping and is never wrapped in a one-element
/// sequence. Use [`Node::items`] when a field may hold one or many values.
///
/// Indexing with a missing key or out-of-range position yields
/// [`Node::Null`] instead of panicking:
///
/// ```rust
/// use goodreads_api::xml;
///
/// let node = xml::parse("<author><id>18541</id><name>Tim O'Reilly</name></author>").unwrap();
/// assert_eq!(node["name"].as_string(), Some("Tim O'Reilly"));
/// assert!(node["missing"]["deeper"].is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// An explicitly absent value (`nil="true"` or a self-closing leaf).
    #[default]
    Null,
    /// Text content. Numbers are not coerced.
    Scalar(String),
    /// Repeated sibling elements, in document order.
    Sequence(Vec<Node>),
    /// Attributes and child elements keyed by underscored name.
    Mapping(BTreeMap<String, Node>),
}

impl Node {
    /// Returns `true` for [`Node::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text of a [`Node::Scalar`].
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items of a [`Node::Sequence`].
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a [`Node::Mapping`].
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a field of a mapping.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(name))
    }

    /// Follows a chain of field names.
    ///
    /// ```rust
    /// use goodreads_api::xml;
    ///
    /// let node = xml::parse("<series><work><best_book><title>Matched</title></best_book></work></series>").unwrap();
    /// let title = node.path(&["work", "best_book", "title"]).and_then(|n| n.as_string());
    /// assert_eq!(title, Some("Matched"));
    /// ```
    #[must_use]
    pub fn path(&self, names: &[&str]) -> Option<&Self> {
        names.iter().try_fold(self, |node, name| node.field(name))
    }

    /// Returns the text of this node: the scalar itself, or the text stored
    /// under [`TEXT_KEY`] of a mapping.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Mapping(map) => map.get(TEXT_KEY).and_then(Self::as_string),
            _ => None,
        }
    }

    /// Returns the text of a field, see [`Node::content`].
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Self::content)
    }

    /// Parses the trimmed text of a field.
    ///
    /// ```rust
    /// use goodreads_api::xml;
    ///
    /// let node = xml::parse(r#"<reviews start="1" end="20" total="40"/>"#).unwrap();
    /// assert_eq!(node.parse_field::<u32>("total"), Some(40));
    /// assert_eq!(node.parse_field::<u32>("missing"), None);
    /// ```
    #[must_use]
    pub fn parse_field<T: FromStr>(&self, name: &str) -> Option<T> {
        self.text(name).and_then(|s| s.trim().parse().ok())
    }

    /// Returns this node as a list of items.
    ///
    /// A sequence yields its items, `Null` yields nothing, and any other node
    /// yields itself. This is the caller-side answer to the singular/plural
    /// asymmetry of the normalized tree.
    #[must_use]
    pub fn items(&self) -> Vec<&Self> {
        match self {
            Self::Null => Vec::new(),
            Self::Sequence(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    /// Consumes this node into a list of items, see [`Node::items`].
    #[must_use]
    pub fn into_items(self) -> Vec<Self> {
        match self {
            Self::Null => Vec::new(),
            Self::Sequence(items) => items,
            other => vec![other],
        }
    }
}

impl Index<&str> for Node {
    type Output = Self;

    fn index(&self, name: &str) -> &Self {
        self.field(name).unwrap_or(&NULL)
    }
}

impl Index<usize> for Node {
    type Output = Self;

    fn index(&self, position: usize) -> &Self {
        self.as_sequence()
            .and_then(|items| items.get(position))
            .unwrap_or(&NULL)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl fmt::Display for Node {
    /// Scalars print their text and `Null` prints nothing; sequences and
    /// mappings print as JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Scalar(s) => f.write_str(s),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, Node)]) -> Node {
        Node::Mapping(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_accessors_match_variants() {
        let scalar = Node::from("x");
        assert_eq!(scalar.as_string(), Some("x"));
        assert!(scalar.as_sequence().is_none());
        assert!(scalar.as_mapping().is_none());

        let seq = Node::Sequence(vec![Node::from("a"), Node::from("b")]);
        assert_eq!(seq.as_sequence().map(<[Node]>::len), Some(2));
        assert!(seq.as_string().is_none());

        assert!(Node::default().is_null());
    }

    #[test]
    fn test_index_falls_back_to_null() {
        let node = mapping(&[("id", Node::from("1"))]);
        assert_eq!(node["id"], Node::from("1"));
        assert!(node["title"].is_null());
        assert!(node[0].is_null());
        assert!(Node::from("x")["anything"].is_null());
    }

    #[test]
    fn test_content_reads_text_key() {
        let node = mapping(&[
            ("type", Node::from("exclusive")),
            (TEXT_KEY, Node::from("read")),
        ]);
        assert_eq!(node.content(), Some("read"));
        assert_eq!(Node::from("plain").content(), Some("plain"));
        assert_eq!(Node::Null.content(), None);
    }

    #[test]
    fn test_items_wraps_only_on_request() {
        let single = mapping(&[("id", Node::from("1"))]);
        assert_eq!(single.items().len(), 1);
        assert_eq!(Node::Null.items().len(), 0);

        let many = Node::Sequence(vec![single.clone(), single.clone(), single]);
        assert_eq!(many.items().len(), 3);
        assert_eq!(many.into_items().len(), 3);
    }

    #[test]
    fn test_parse_field_trims_whitespace() {
        let node = mapping(&[("fans_count", Node::from(" 109\n"))]);
        assert_eq!(node.parse_field::<u64>("fans_count"), Some(109));
        assert_eq!(node.parse_field::<u64>("missing"), None);
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let node = mapping(&[
            ("died_at", Node::Null),
            ("id", Node::from("18541")),
            ("works", Node::Sequence(vec![Node::from("a")])),
        ]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"died_at": null, "id": "18541", "works": ["a"]})
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Node::from("Rework").to_string(), "Rework");
        assert_eq!(Node::Null.to_string(), "");
        assert_eq!(
            Node::Sequence(vec![Node::from("a")]).to_string(),
            r#"["a"]"#
        );
    }
}
