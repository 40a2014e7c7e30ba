//! Deterministic round-robin palette assignment

use crate::assign::{ColorAssigner, PracticeColors};
use crate::color::Color;
use crate::error::ColorError;
use capmap_model::PracticeId;

/// High-contrast neon palette
///
/// Order is part of the contract: the i-th practice always receives
/// `NEON_PALETTE[i % len]`. Some values repeat; uniqueness is not promised
/// by this scheme.
pub const NEON_PALETTE: [&str; 38] = [
    "#FF00FF", "#39FF14", "#FF073A", "#FFAA1D", "#00FFFF", "#FF00CC", "#CCFF00", "#FF33FF",
    "#FF6700", "#FFFF66", "#66FF66", "#66FFFF", "#FF66FF", "#FF6666", "#FF3399", "#FF6633",
    "#CCFF33", "#00FF66", "#00FFCC", "#33FF33", "#FF3399", "#CC33FF", "#FF33CC", "#33FFFF",
    "#FF9933", "#33FF66", "#FF0033", "#00FF99", "#FF00FF", "#99FF00", "#00FF00", "#99FF33",
    "#FF3366", "#33FF99", "#FF99FF", "#99FFFF", "#FF6699", "#FFCC00",
];

/// Round-robin assignment over a fixed palette
#[derive(Debug, Clone)]
pub struct PaletteAssigner {
    palette: Vec<Color>,
}

impl PaletteAssigner {
    /// Assigner over [`NEON_PALETTE`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: NEON_PALETTE.iter().copied().map(Color::from).collect(),
        }
    }

    /// Assigner over a custom palette
    ///
    /// # Errors
    /// Returns [`ColorError::EmptyPalette`] if `palette` is empty.
    pub fn with_palette(palette: Vec<Color>) -> Result<Self, ColorError> {
        if palette.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { palette })
    }

    /// Palette in assignment order
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Color for the practice at `position`
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> &Color {
        &self.palette[position % self.palette.len()]
    }
}

impl Default for PaletteAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAssigner for PaletteAssigner {
    fn assign<'a, I>(&mut self, practices: I) -> Result<PracticeColors, ColorError>
    where
        I: IntoIterator<Item = &'a PracticeId>,
    {
        Ok(practices
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), self.color_at(i).clone()))
            .collect())
    }

    fn name(&self) -> &'static str {
        "palette"
    }
}
