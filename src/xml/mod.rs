//! XML response normalization.
//!
//! Goodreads answers every call with XML. This module turns a response body
//! into a [`Node`] tree that callers navigate by field name, without a
//! per-endpoint schema.
//!
//! # Rules
//!
//! - The `GoodreadsResponse` envelope is stripped along with its `Request`
//!   metadata child. If a single payload element remains it is returned
//!   directly. Any other root element is returned as its own node.
//! - Repeated sibling elements collapse into a [`Node::Sequence`]; a single
//!   occurrence stays a scalar or mapping and is never wrapped.
//! - Attributes and child elements share one mapping. When both use the same
//!   name, the child element wins.
//! - A leaf element yields its text as a [`Node::Scalar`]. A self-closing
//!   leaf or one marked `nil="true"` yields [`Node::Null`]; `<x></x>` yields
//!   an empty string.
//! - `type="integer"` and similar hints are dropped. Values are never coerced
//!   to numbers; use [`Node::parse_field`] where a number is needed.
//! - Names have `-` replaced by `_`.
//!
//! # Example
//!
//! ```rust
//! use goodreads_api::xml;
//!
//! let body = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <GoodreadsResponse>
//!   <Request><authentication>true</authentication></Request>
//!   <search>
//!     <query>Rework</query>
//!     <results><work><id>1</id></work><work><id>2</id></work><work><id>3</id></work></results>
//!   </search>
//! </GoodreadsResponse>"#;
//!
//! let search = xml::parse(body).unwrap();
//! assert_eq!(search.text("query"), Some("Rework"));
//! assert_eq!(search["results"]["work"].as_sequence().unwrap().len(), 3);
//! ```

mod node;
mod parser;

pub use node::{Node, TEXT_KEY};
pub use parser::parse_document;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Root element wrapping every Goodreads response.
pub const ENVELOPE_TAG: &str = "GoodreadsResponse";

/// Request metadata element inside the envelope.
pub const REQUEST_TAG: &str = "Request";

/// Errors raised for bodies that are not well-formed XML.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The XML reader rejected the document.
    #[error("Malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    /// A name or CDATA section was not valid UTF-8.
    #[error("Malformed XML: invalid UTF-8")]
    InvalidUtf8,

    /// The document ended inside an element.
    #[error("Malformed XML: element <{name}> is never closed")]
    Unclosed {
        /// The element left open.
        name: String,
    },

    /// The document contains no element.
    #[error("Malformed XML: no root element")]
    NoRoot,

    /// The document contains more than one top-level element.
    #[error("Malformed XML: more than one root element")]
    MultipleRoots,

    /// Character data appeared outside the root element.
    #[error("Malformed XML: text outside the root element")]
    TextOutsideRoot,
}

/// Parses a response body and strips its envelope.
///
/// # Errors
///
/// Returns [`XmlError`] if the body is not well-formed XML.
pub fn parse(body: &str) -> Result<Node, XmlError> {
    let (root, node) = parse_document(body)?;
    Ok(strip_envelope(&root, node))
}

/// Removes the response envelope from a parsed root element.
#[must_use]
pub fn strip_envelope(root: &str, node: Node) -> Node {
    if root != ENVELOPE_TAG {
        tracing::debug!(root, "Response has no envelope, returning root element");
        return node;
    }

    match node {
        Node::Mapping(mut map) => {
            map.remove(REQUEST_TAG);
            match map.len() {
                0 => Node::Null,
                1 => map.into_values().next().unwrap_or_default(),
                _ => Node::Mapping(map),
            }
        }
        other => other,
    }
}
