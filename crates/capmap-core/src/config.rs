//! Pipeline configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! [colors]
//! scheme = "unique_pastel"
//! max_attempts = 5000
//! seed = 7
//!
//! [layout.value_stream]
//! order = ["VS1", "VS2"]
//! max_columns = 2
//! ```

use crate::error::ConfigError;
use capmap_color::DEFAULT_MAX_ATTEMPTS;
use capmap_layout::LayoutConfig;
use capmap_model::ValueStreamId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color assignment scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Round-robin over the fixed neon palette
    #[default]
    Palette,
    /// Random pastels, no repeats within a pass
    UniquePastel,
}

/// Color settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Scheme to run
    pub scheme: ColorScheme,
    /// Redraw budget per practice for the random scheme
    pub max_attempts: usize,
    /// Use the palette when the random scheme runs out of attempts
    pub fallback_to_palette: bool,
    /// Seed for the random scheme; unseeded runs differ every load
    pub seed: Option<u64>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Palette,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback_to_palette: true,
            seed: None,
        }
    }
}

/// capmap configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapmapConfig {
    /// Color assignment
    pub colors: ColorConfig,
    /// Layout constants
    pub layout: LayoutConfig,
}

impl CapmapConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML, or any error from
    /// [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// With color scheme
    #[inline]
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.colors.scheme = scheme;
        self
    }

    /// With random color seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.colors.seed = Some(seed);
        self
    }

    /// With redraw budget per practice
    #[inline]
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.colors.max_attempts = max_attempts;
        self
    }

    /// With or without palette fallback
    #[inline]
    #[must_use]
    pub fn with_fallback_to_palette(mut self, fallback: bool) -> Self {
        self.colors.fallback_to_palette = fallback;
        self
    }

    /// With layout constants
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// With value-stream display order
    #[must_use]
    pub fn with_value_stream_order<I, T>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ValueStreamId>,
    {
        self.layout.value_stream.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Reject values no load cycle can run with
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for a zero attempt budget,
    /// [`ConfigError::Layout`] for bad layout constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "colors.max_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        self.layout.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = CapmapConfig::from_toml_str("").unwrap();
        assert_eq!(config, CapmapConfig::default());
        assert_eq!(config.colors.max_attempts, 10_000);
        assert!(config.colors.fallback_to_palette);
    }

    #[test]
    fn partial_document() {
        let config = CapmapConfig::from_toml_str(
            r#"
            [colors]
            scheme = "unique_pastel"
            seed = 7

            [layout.centered]
            practice_top = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(config.colors.scheme, ColorScheme::UniquePastel);
        assert_eq!(config.colors.seed, Some(7));
        assert_eq!(config.colors.max_attempts, 10_000);
        assert!((config.layout.centered.practice_top - 0.8).abs() < f64::EPSILON);
        assert!((config.layout.centered.practice_bottom - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_attempts_rejected() {
        let err = CapmapConfig::from_toml_str("[colors]\nmax_attempts = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "colors.max_attempts", .. }));
    }

    #[test]
    fn zero_columns_rejected() {
        let err = CapmapConfig::from_toml_str("[layout.value_stream]\nmax_columns = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Layout(_)));
    }

    #[test]
    fn unknown_scheme_is_parse_error() {
        let err = CapmapConfig::from_toml_str("[colors]\nscheme = \"rainbow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn builders() {
        let config = CapmapConfig::new()
            .with_color_scheme(ColorScheme::UniquePastel)
            .with_seed(3)
            .with_max_attempts(50)
            .with_fallback_to_palette(false)
            .with_value_stream_order(["VS1"]);

        assert_eq!(config.colors.seed, Some(3));
        assert_eq!(config.colors.max_attempts, 50);
        assert!(!config.colors.fallback_to_palette);
        assert_eq!(config.layout.value_stream.order, vec![ValueStreamId::new("VS1")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn round_trips_through_toml() {
        let config = CapmapConfig::new().with_seed(11).with_value_stream_order(["A", "B"]);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CapmapConfig::from_toml_str(&text).unwrap(), config);
    }
}
