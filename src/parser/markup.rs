//! Minimal parser for the one-tag-per-line XML subset used by presentation
//! files.
//!
//! This is not an XML parser. Each line holds one opening tag with
//! `name="value"` attributes; a tag that is neither self-closing nor closed on
//! the same line owns the following lines as children until a line that is
//! not an opening tag (normally its closing tag).

use crate::base::text::LineReader;
use crate::base::{Object, Value};

use super::error::ParseError;
use super::scalar::attribute_value;

/// One parsed tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    pub kind: String,
    pub attr: Object,
    pub children: Vec<Node>,
}

impl Node {
    /// Convert into the generic `{type, attr, children}` shape.
    pub fn into_value(self) -> Value {
        let mut object = Object::new();
        object.insert("type".to_string(), Value::String(self.kind));
        object.insert("attr".to_string(), Value::Object(self.attr));
        object.insert(
            "children".to_string(),
            Value::Array(self.children.into_iter().map(Node::into_value).collect()),
        );
        Value::Object(object)
    }

    /// Direct children with the given tag name.
    pub fn children_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.kind == kind)
    }
}

/// Parse a document into its root tag.
///
/// Returns `Ok(None)` when the first tag line is missing or is not an
/// opening tag.
pub fn parse(text: &str) -> Result<Option<Node>, ParseError> {
    let mut reader = LineReader::new(text);

    let mut first = reader.next_line();
    if first.is_some_and(|line| line.starts_with("<?xml")) {
        first = reader.next_line();
    }

    match first {
        Some(line) => parse_node(line, &mut reader),
        None => Ok(None),
    }
}

fn parse_node(line: &str, reader: &mut LineReader<'_>) -> Result<Option<Node>, ParseError> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let Some(tag) = trimmed.strip_prefix('<') else {
        return Ok(None);
    };
    if tag.starts_with('/') {
        return Ok(None);
    }

    let name_end = tag.find([' ', '>', '/']).unwrap_or(tag.len());
    let mut node = Node {
        kind: tag[..name_end].to_string(),
        ..Node::default()
    };

    let rest = parse_attributes(&tag[name_end..], &mut node.attr)
        .ok_or_else(|| ParseError::malformed_attribute(reader.line_number(), line))?;

    let childless = rest.trim_end() == "/>" || rest.contains("</");
    if !childless {
        while let Some(next) = reader.next_line() {
            match parse_node(next, reader)? {
                Some(child) => node.children.push(child),
                None => break,
            }
        }
    }

    Ok(Some(node))
}

/// Read `name="value"` pairs until `>` or `/>`. Returns the unread remainder,
/// or `None` when an attribute is malformed.
fn parse_attributes<'a>(mut rest: &'a str, attr: &mut Object) -> Option<&'a str> {
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with('>') || rest.starts_with("/>") {
            return Some(rest);
        }

        let (name, after) = rest.split_once('=')?;
        let after = after.strip_prefix('"')?;
        let (value, after) = after.split_once('"')?;

        attr.insert(name.trim().to_string(), attribute_value(value));
        rest = after;
    }
}
