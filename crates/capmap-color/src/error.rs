//! Color assignment errors

/// Errors raised by a [`ColorAssigner`](crate::ColorAssigner)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// No unused color was drawn within the attempt budget
    #[error("no unused color for practice {practice_id} after {attempts} attempts")]
    Exhausted {
        /// Practice left without a color
        practice_id: String,
        /// Attempts spent on it
        attempts: usize,
    },

    /// Palette has no entries
    #[error("palette is empty")]
    EmptyPalette,
}

impl ColorError {
    /// Whether retrying the whole pass may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}
