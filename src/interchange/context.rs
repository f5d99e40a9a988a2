//! Import configuration.

use serde::{Deserialize, Serialize};

use crate::base::Platform;

/// Output canvas size. Fractional geometry is scaled by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Settings every translation reads.
///
/// ```ignore
/// let context: ImportContext = serde_json::from_str(r#"{"platform": "linux"}"#)?;
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportContext {
    /// Platform whose source identifiers the output uses.
    pub platform: Platform,
    pub canvas: Canvas,
}

impl ImportContext {
    pub fn new(platform: Platform, canvas: Canvas) -> Self {
        Self { platform, canvas }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }
}
