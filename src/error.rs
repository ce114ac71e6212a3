//! Error types for descriptor loading.
//!
//! Wheel processing itself never fails; every kernel value is accepted.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read device descriptor {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed device descriptor: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("click angle for the {axis} axis must be finite and nonzero, got {value}")]
    InvalidClickAngle { axis: char, value: f64 },

    #[error("dpi must be nonzero")]
    InvalidDpi,
}
