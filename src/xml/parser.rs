//! Event-driven conversion of an XML document into a [`Node`] tree.

use std::collections::{BTreeMap, BTreeSet};
use std::str;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::xml::node::{Node, TEXT_KEY};
use crate::xml::XmlError;

/// `type` attribute values that describe the element instead of carrying data.
const TYPE_HINTS: &[&str] = &[
    "array", "boolean", "date", "datetime", "decimal", "float", "integer", "string", "symbol",
];

/// An element whose end tag has not been seen yet.
#[derive(Debug)]
struct Frame {
    name: String,
    nil: bool,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Node)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = normalize_name(start.name().as_ref())?;
        let mut nil = false;
        let mut attributes = Vec::new();

        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = normalize_name(attribute.key.as_ref())?;
            let value = attribute.unescape_value()?.into_owned();

            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            if key == "nil" {
                nil = value == "true";
                continue;
            }
            if key == "type" && TYPE_HINTS.contains(&value.as_str()) {
                continue;
            }
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            nil,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    /// Converts the finished element into its node.
    ///
    /// Attributes and child elements share one mapping. A child element
    /// replaces an attribute of the same name, and further siblings with that
    /// name collapse with the child, never with the attribute.
    fn close(self, self_closing: bool) -> (String, Node) {
        let node = if self.nil {
            Node::Null
        } else if self.children.is_empty() && self.attributes.is_empty() {
            if self_closing {
                Node::Null
            } else {
                Node::Scalar(self.text)
            }
        } else {
            let has_children = !self.children.is_empty();
            let mut attribute_keys: BTreeSet<String> =
                self.attributes.iter().map(|(k, _)| k.clone()).collect();
            let mut map: BTreeMap<String, Node> = self
                .attributes
                .into_iter()
                .map(|(k, v)| (k, Node::Scalar(v)))
                .collect();

            for (name, child) in self.children {
                if attribute_keys.remove(&name) {
                    map.insert(name, child);
                    continue;
                }
                collapse_into(&mut map, name, child);
            }

            if !has_children && !self.text.trim().is_empty() {
                map.insert(TEXT_KEY.to_string(), Node::Scalar(self.text));
            }

            Node::Mapping(map)
        };

        (self.name, node)
    }
}

/// Inserts `child` under `name`, turning repeated names into a sequence.
fn collapse_into(map: &mut BTreeMap<String, Node>, name: String, child: Node) {
    match map.get_mut(&name) {
        None => {
            map.insert(name, child);
        }
        Some(Node::Sequence(items)) => items.push(child),
        Some(existing) => {
            let first = std::mem::take(existing);
            *existing = Node::Sequence(vec![first, child]);
        }
    }
}

/// Converts a raw tag or attribute name, replacing `-` with `_`.
fn normalize_name(raw: &[u8]) -> Result<String, XmlError> {
    let name = str::from_utf8(raw).map_err(|_| XmlError::InvalidUtf8)?;
    Ok(name.replace('-', "_"))
}

/// Parses `body` into the name and node of its root element.
///
/// # Errors
///
/// Returns [`XmlError`] if the document is not well-formed, has no root
/// element, or has more than one.
pub fn parse_document(body: &str) -> Result<(String, Node), XmlError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Node)> = None;

    loop {
        let finished = match reader.read_event()? {
            Event::Start(start) => {
                stack.push(Frame::open(&start)?);
                None
            }
            Event::Empty(start) => Some(Frame::open(&start)?.close(true)),
            Event::End(_) => stack.pop().map(|frame| frame.close(false)),
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None if !text.trim().is_empty() => return Err(XmlError::TextOutsideRoot),
                    None => {}
                }
                None
            }
            Event::CData(data) => {
                let data = str::from_utf8(&data).map_err(|_| XmlError::InvalidUtf8)?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(data),
                    None => return Err(XmlError::TextOutsideRoot),
                }
                None
            }
            Event::Eof => break,
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => None,
        };

        if let Some((name, node)) = finished {
            match stack.last_mut() {
                Some(parent) => parent.children.push((name, node)),
                None if root.is_some() => return Err(XmlError::MultipleRoots),
                None => root = Some((name, node)),
            }
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(XmlError::Unclosed { name: frame.name });
    }

    root.ok_or(XmlError::NoRoot)
}
