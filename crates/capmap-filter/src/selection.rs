//! What the user picked

use capmap_model::{PracticeId, ProcessId};
use serde::{Deserialize, Serialize};

/// Starting side of a filter walk
///
/// An empty list selects everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ids", rename_all = "snake_case")]
pub enum Selection {
    /// Practices by id
    Practices(Vec<PracticeId>),
    /// Processes by id; their owners become the selected practices
    Processes(Vec<ProcessId>),
}

impl Selection {
    /// Everything
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::Practices(Vec::new())
    }

    /// Select practices
    #[must_use]
    pub fn practices<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PracticeId>,
    {
        Self::Practices(ids.into_iter().map(Into::into).collect())
    }

    /// Select processes
    #[must_use]
    pub fn processes<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ProcessId>,
    {
        Self::Processes(ids.into_iter().map(Into::into).collect())
    }

    /// True if nothing specific was picked
    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        match self {
            Self::Practices(ids) => ids.is_empty(),
            Self::Processes(ids) => ids.is_empty(),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}
