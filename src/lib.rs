//! # scene-import-base
//!
//! Core library for importing legacy broadcast scene collections into one
//! canonical JSON document.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → Format registry, per-application translators, canonical document
//!   ↓
//! project     → Filesystem access, per-platform config directories
//!   ↓
//! parser      → Line-oriented and markup readers, scalar auto-typing
//!   ↓
//! base        → Primitives (Value tree, Platform, line reading)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → project → interchange)
// ============================================================================

/// Foundation types: Value tree, Platform, text helpers
pub mod base;

/// Parsers for the legacy text formats
pub mod parser;

/// Filesystem and config-directory access
pub mod project;

/// Scene-collection formats and the import registry
pub mod interchange;

// Re-export foundation types
pub use base::{Fields, Object, Platform, Value};

// Re-export the import surface
pub use interchange::{
    FormatId, FormatRegistry, ImportContext, ImportError, ImportStatus, SceneCollection,
    SceneFormat,
};
