//! Filesystem collaborators.
//!
//! The importers never touch `std::fs` directly: reads go through
//! [`FileSystem`] and per-OS configuration roots come from
//! [`ConfigLocator`]. [`Locator`] combines the two for file discovery.

mod fs;
mod locate;

pub use fs::{FileSystem, OsFileSystem};
pub use locate::{ConfigLocator, Locator, SystemLocator};
