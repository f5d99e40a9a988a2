//! Line-oriented parser for indented `key : value` scene files.
//!
//! ```text
//! scenes : {
//!   MyScene : {
//!     sources : {
//!       Cam : {
//!         class : DeviceCapture
//!         x : 10
//!         data : {
//!           deviceName : Webcam
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! A line ending in `{` opens a block. A block whose key starts with
//! `sources` is a *named-source block*: every entry `Name : {` becomes an
//! object with a `name` member and the entries are collected into an array.
//! Every other block is a nested object. A line ending in `}` closes the
//! innermost open block.

use crate::base::text::LineReader;
use crate::base::{Object, Value};

use super::error::ParseError;
use super::scalar::line_value;

/// Header of the top-level block holding sources shared between scenes.
pub const GLOBAL_SOURCES_HEADER: &str = "global sources : {";

/// Parse a whole document.
///
/// The result is an object with up to two members: `globals` for the block
/// opened by [`GLOBAL_SOURCES_HEADER`] and `scenes` for any other top-level
/// block. Both are arrays of named objects.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut reader = LineReader::new(text);
    let mut root = Object::new();

    while let Some(line) = reader.next_line() {
        if line.trim().is_empty() {
            continue;
        }
        if block_key(line).is_none() {
            return Err(ParseError::missing_colon(reader.line_number(), line));
        }

        let key = if line.trim_end() == GLOBAL_SOURCES_HEADER {
            "globals"
        } else {
            "scenes"
        };
        let sources = parse_source_block(&mut reader)?;
        tracing::trace!(key, count = sources.len(), "parsed top-level block");
        root.insert(key.to_string(), Value::Array(sources));
    }

    Ok(Value::Object(root))
}

fn parse_source_block(reader: &mut LineReader<'_>) -> Result<Vec<Value>, ParseError> {
    let mut sources = Vec::new();

    loop {
        let line = next_line(reader)?;
        if line.trim().is_empty() {
            continue;
        }
        if closes_block(line) {
            return Ok(sources);
        }

        let name = block_key(line)
            .ok_or_else(|| ParseError::missing_colon(reader.line_number(), line))?;
        let mut source = parse_object_body(reader)?;
        source.insert("name".to_string(), Value::String(name.to_string()));
        sources.push(Value::Object(source));
    }
}

fn parse_object_body(reader: &mut LineReader<'_>) -> Result<Object, ParseError> {
    let mut object = Object::new();

    loop {
        let line = next_line(reader)?;
        if line.trim().is_empty() {
            continue;
        }
        if closes_block(line) {
            return Ok(object);
        }

        if line.trim_end().ends_with('{') {
            let key = block_key(line)
                .ok_or_else(|| ParseError::missing_colon(reader.line_number(), line))?;

            if key.to_ascii_lowercase().starts_with("sources") {
                let sources = parse_source_block(reader)?;
                object.insert("sources".to_string(), Value::Array(sources));
            } else {
                let child = parse_object_body(reader)?;
                object.insert(key.to_string(), Value::Object(child));
            }
        } else {
            let (key, raw) = split_item(line)
                .ok_or_else(|| ParseError::missing_colon(reader.line_number(), line))?;
            insert_repeated(&mut object, key, line_value(raw));
        }
    }
}

fn next_line<'a>(reader: &mut LineReader<'a>) -> Result<&'a str, ParseError> {
    reader.next_line().ok_or(ParseError::UnexpectedEof {
        line: reader.line_number(),
    })
}

fn closes_block(line: &str) -> bool {
    line.trim_end().ends_with('}')
}

/// Key of a block-opening line `  Key : {`.
fn block_key(line: &str) -> Option<&str> {
    let line = line.trim_start_matches([' ', '\t']).trim_end();
    let line = line.strip_suffix('{').unwrap_or(line).trim_end();
    line.strip_suffix(':').map(str::trim)
}

/// Split `  key : value` at the first colon. One space before the colon
/// belongs to the layout, not the key.
fn split_item(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start_matches([' ', '\t']);
    let (key, raw) = line.split_once(':')?;
    Some((key.strip_suffix(' ').unwrap_or(key), raw))
}

/// Assign `key`, promoting an existing member to an array on repetition.
fn insert_repeated(object: &mut Object, key: &str, value: Value) {
    match object.get_mut(key) {
        None => {
            object.insert(key.to_string(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = std::mem::take(existing);
            *existing = Value::Array(vec![first, value]);
        }
    }
}
