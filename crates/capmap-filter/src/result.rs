//! Filter output

use capmap_index::ArtifactEntry;
use capmap_model::{PracticeId, ProcessId, ProcessPair};
use serde::Serialize;

/// Directed practice-to-practice edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PracticeEdge {
    /// Practice owning the sending process
    pub source: PracticeId,
    /// Practice owning the receiving process
    pub destination: PracticeId,
}

impl PracticeEdge {
    /// Create an edge
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<PracticeId>, destination: impl Into<PracticeId>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Process pair walked by the filter, with what it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flow {
    /// Sending and receiving process
    pub pair: ProcessPair,
    /// Artifacts in transit, repeats included
    pub artifacts: Vec<ArtifactEntry>,
}

/// Both sides of one filter walk
///
/// Sides are named by edge direction, not by which one was selected:
/// a forward walk selects the source side, a reverse walk the destination side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterResult {
    /// Practices on the sending side, in practice order
    pub source_practices: Vec<PracticeId>,
    /// Practices on the receiving side, in practice order
    pub destination_practices: Vec<PracticeId>,
    /// Every process owned by a sending-side practice
    pub source_processes: Vec<ProcessId>,
    /// Every process owned by a receiving-side practice
    pub destination_processes: Vec<ProcessId>,
    /// Processes actually reached from the selection
    pub reached_processes: Vec<ProcessId>,
    /// Deduplicated practice edges between the two sides
    pub relationships: Vec<PracticeEdge>,
    /// Process pairs walked, in interaction order
    pub flows: Vec<Flow>,
}

impl FilterResult {
    /// True if the walk reached nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Artifacts carried between two processes, if that pair was walked
    #[must_use]
    pub fn artifacts_between(&self, pair: &ProcessPair) -> Option<&[ArtifactEntry]> {
        self.flows
            .iter()
            .find(|flow| &flow.pair == pair)
            .map(|flow| flow.artifacts.as_slice())
    }
}
