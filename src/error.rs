//! Error types for the splitstick crate

use thiserror::Error;

/// Rejected surface dimensions.
///
/// The tracker fails fast here instead of dividing by a zero radius on the
/// first move event.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("surface dimensions must be positive, got {width}x{height}")]
    NonPositive { width: i32, height: i32 },

    #[error("surface {width}x{height} is too small to derive a stick radius")]
    RadiusTooSmall { width: i32, height: i32 },
}

/// Failure loading or parsing a pointer trace.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trace: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure loading the replay configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
}
