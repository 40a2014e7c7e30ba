//! Referential gaps found while indexing

use capmap_model::{ArtifactId, PracticeId, ProcessId};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Which end of an interaction is dangling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    /// Source process
    Source,
    /// Destination process
    Destination,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Non-fatal reference to something that is not in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReferentialGap {
    /// Process names a practice that does not exist; process left out of the index
    UnknownPractice {
        /// Orphaned process
        process_id: ProcessId,
        /// Missing practice
        practice_id: PracticeId,
    },

    /// Interaction end is not an indexed process; interaction left out of the index
    DanglingInteraction {
        /// Row in the interaction table
        row: usize,
        /// Dangling end
        endpoint: Endpoint,
        /// Unresolved process
        process_id: ProcessId,
    },

    /// Interaction carries an artifact that does not exist; kept with no name
    UnknownArtifact {
        /// Row in the interaction table
        row: usize,
        /// Missing artifact
        artifact_id: ArtifactId,
    },
}

impl Display for ReferentialGap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPractice { process_id, practice_id } => {
                write!(f, "process {process_id} references unknown practice {practice_id}")
            }
            Self::DanglingInteraction { row, endpoint, process_id } => {
                write!(f, "interaction {row} has unknown {endpoint} process {process_id}")
            }
            Self::UnknownArtifact { row, artifact_id } => {
                write!(f, "interaction {row} carries unknown artifact {artifact_id}")
            }
        }
    }
}

/// Everything the indexer had to skip or patch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Gaps in discovery order
    pub gaps: Vec<ReferentialGap>,
}

impl IndexReport {
    /// True if the source tables were referentially complete
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.gaps.is_empty()
    }

    pub(crate) fn record(&mut self, gap: ReferentialGap) {
        tracing::warn!("Referential gap: {gap}");
        self.gaps.push(gap);
    }
}
