//! Color values and HLS conversion

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

const NEUTRAL: &str = "#FFFFFF";

/// Render-ready color string (`#RRGGBB` or `rgb(r,g,b)`)
///
/// Colors are compared as strings: two practices share a color only if
/// their rendered values are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a color string
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `rgb(r,g,b)` color
    #[inline]
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("rgb({r},{g},{b})"))
    }

    /// Color used when a lookup has no assignment
    #[inline]
    #[must_use]
    pub fn neutral() -> Self {
        Self(NEUTRAL.to_string())
    }

    /// Borrow the rendered value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert hue/lightness/saturation (each in `[0, 1]`) to RGB channels in `[0, 1]`
#[must_use]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Scale a `[0, 1]` channel to a byte, truncating
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_to_byte(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}
