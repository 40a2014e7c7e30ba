//! Color assignment trait and result mapping

use crate::color::Color;
use crate::error::ColorError;
use capmap_model::PracticeId;
use indexmap::IndexMap;
use serde::Serialize;

/// Assigns one color per practice
///
/// Implementations must return a total mapping: every practice id yielded
/// by the input appears in the result, in input order.
pub trait ColorAssigner: std::fmt::Debug {
    /// Assign colors for one load cycle
    ///
    /// # Errors
    /// Returns a [`ColorError`] if the scheme cannot produce a color.
    fn assign<'a, I>(&mut self, practices: I) -> Result<PracticeColors, ColorError>
    where
        I: IntoIterator<Item = &'a PracticeId>;

    /// Scheme name (for logging)
    fn name(&self) -> &'static str;
}

/// Practice id → color mapping for one load cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PracticeColors(IndexMap<PracticeId, Color>);

impl PracticeColors {
    /// Empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Color of a practice, if assigned
    #[inline]
    #[must_use]
    pub fn get(&self, practice_id: &str) -> Option<&Color> {
        self.0.get(practice_id)
    }

    /// Color of a practice, or the neutral color
    #[must_use]
    pub fn get_or_neutral(&self, practice_id: &str) -> Color {
        self.get(practice_id).cloned().unwrap_or_else(Color::neutral)
    }

    /// Number of assigned practices
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is assigned
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&PracticeId, &Color)> {
        self.0.iter()
    }

    pub(crate) fn insert(&mut self, practice_id: PracticeId, color: Color) {
        self.0.insert(practice_id, color);
    }
}

impl FromIterator<(PracticeId, Color)> for PracticeColors {
    fn from_iter<T: IntoIterator<Item = (PracticeId, Color)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
