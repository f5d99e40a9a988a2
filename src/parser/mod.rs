//! Tree recovery for the legacy text formats.
//!
//! Two bespoke parsers turn raw file contents into the generic value tree:
//!
//! - [`classic`] - indented `key : value` blocks (`.xconfig` scene files)
//! - [`markup`] - a one-tag-per-line XML subset (`.bpres` presentations)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! LineReader → one line at a time, CRLF / LF / CR
//!     ↓
//! classic::parse / markup::parse → recursive descent over lines
//!     ↓
//! scalar → untyped text auto-typed to String / Integer / Double
//!     ↓
//! Value tree (base)
//! ```
//!
//! JSON formats do not come through here; they are read with `serde_json`.

pub mod classic;
mod error;
pub mod markup;
pub mod scalar;

pub use error::ParseError;
pub use markup::Node;
