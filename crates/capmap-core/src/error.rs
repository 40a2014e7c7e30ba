//! Error types for the capmap pipeline
//!
//! Only two things stop a load cycle: a configuration that cannot be used,
//! and a color pass that runs out of attempts with no fallback. Everything
//! else (bad rows, referential gaps, unknown selections) is reported, not
//! raised.

use capmap_color::ColorError;
use capmap_layout::LayoutError;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`CapmapConfig`](crate::CapmapConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A layout constant is out of range
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration rejected
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Color assignment failed
    #[error("color assignment failed: {0}")]
    Color(#[from] ColorError),
}

impl CoreError {
    /// Whether running the same load cycle again may succeed
    ///
    /// True only for random color exhaustion; a rejected configuration
    /// needs different input.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Color(err) if err.is_retryable())
    }
}

impl From<LayoutError> for CoreError {
    fn from(err: LayoutError) -> Self {
        Self::Config(ConfigError::Layout(err))
    }
}
