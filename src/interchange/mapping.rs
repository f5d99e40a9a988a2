//! Declarative settings remapping.
//!
//! Legacy source settings are mostly one-to-one renames with a small value
//! conversion. Each translator describes those as a table of [`FieldMap`]
//! entries and runs it through [`apply`]; only irregular settings are
//! written by hand.

use crate::base::text::collapse_escaped_slashes;
use crate::base::{Fields, Object, Value};

/// Alpha bits added to 24-bit RGB colours.
pub const COLOR_ALPHA_BIAS: i64 = 0xFF00_0000;

pub const FONT_BOLD: i64 = 1;
pub const FONT_ITALIC: i64 = 2;
pub const FONT_UNDERLINE: i64 = 4;

/// Value conversion applied while copying a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conv {
    /// Any scalar rendered as text.
    Str,
    /// Text with escaped `\\` separators rewritten to `/`.
    Path,
    Int,
    Double,
    Bool,
    /// Integer flag, true only when it equals `1`.
    Flag,
    /// 24-bit RGB widened to opaque ARGB.
    Color,
}

/// Copy `from` of the input to `to` of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMap {
    pub from: &'static str,
    pub to: &'static str,
    pub conv: Conv,
}

pub const fn field(from: &'static str, to: &'static str, conv: Conv) -> FieldMap {
    FieldMap { from, to, conv }
}

/// Run `table` over `input`, writing every target key into `out`.
///
/// Missing input members produce the conversion's default.
pub fn apply(table: &[FieldMap], input: &(impl Fields + ?Sized), out: &mut Object) {
    for entry in table {
        let value = match entry.conv {
            Conv::Str => Value::String(input.get_text(entry.from)),
            Conv::Path => Value::String(collapse_escaped_slashes(&input.get_text(entry.from))),
            Conv::Int => Value::Integer(input.get_int(entry.from)),
            Conv::Double => Value::Double(input.get_double(entry.from)),
            Conv::Bool => Value::Boolean(input.get_bool(entry.from)),
            Conv::Flag => Value::Boolean(input.get_int(entry.from) == 1),
            Conv::Color => Value::Integer(rgb_to_argb(input.get_int(entry.from))),
        };
        out.insert(entry.to.to_string(), value);
    }
}

/// Opaque ARGB from a 24-bit colour. Signed encodings of the same colour
/// give the same result.
pub fn rgb_to_argb(rgb: i64) -> i64 {
    (rgb & 0x00FF_FFFF) + COLOR_ALPHA_BIAS
}

pub fn font_style(bold: bool, italic: bool) -> &'static str {
    match (bold, italic) {
        (true, true) => "Bold Italic",
        (true, false) => "Bold",
        (false, true) => "Italic",
        (false, false) => "Regular",
    }
}

pub fn font_flags(bold: bool, italic: bool, underline: bool) -> i64 {
    let mut flags = 0;
    if bold {
        flags |= FONT_BOLD;
    }
    if italic {
        flags |= FONT_ITALIC;
    }
    if underline {
        flags |= FONT_UNDERLINE;
    }
    flags
}
