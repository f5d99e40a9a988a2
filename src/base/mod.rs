//! Foundation types for the importers.
//!
//! This module provides the types every other module builds on:
//! - [`Value`], [`Object`], [`Fields`] - the structured value tree
//! - [`LineReader`] and lenient scalar parsing used by the legacy parsers
//! - [`Platform`] - the operating system an import targets
//!
//! This module has NO dependencies on other crate modules.

mod platform;
pub mod text;
mod value;

pub use platform::Platform;
pub use text::LineReader;
pub use value::{Fields, Object, Value};
