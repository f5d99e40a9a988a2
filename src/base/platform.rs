//! Target operating system of an import.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating system whose source identifiers the canonical document uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// The platform this crate was compiled for. Anything that is neither
    /// Windows nor macOS uses the Linux identifiers.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win32" => Ok(Platform::Windows),
            "macos" | "darwin" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}
