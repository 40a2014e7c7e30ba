//! Data-quality audits over the loaded tables

use capmap_model::{ArtifactId, EntityStore, PracticeId, ProcessId};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Process that no interaction delivers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreceivingProcess {
    /// Owning practice as recorded on the process
    pub practice_id: PracticeId,
    /// Process id
    pub process_id: ProcessId,
    /// Process name
    pub name: String,
}

impl Display for UnreceivingProcess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Practice: {}, Process: {}", self.practice_id, self.name)
    }
}

/// Artifact that no interaction carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncarriedArtifact {
    /// Artifact id
    pub artifact_id: ArtifactId,
    /// Artifact name
    pub name: String,
}

impl Display for UncarriedArtifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Artifact: {}", self.name)
    }
}

/// Audit findings, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Processes that are never an interaction destination
    pub processes_without_destination: Vec<UnreceivingProcess>,
    /// Artifacts never carried by any interaction
    pub artifacts_without_source: Vec<UncarriedArtifact>,
}

impl AuditReport {
    /// Audit a store
    ///
    /// Runs over the recorded interactions as loaded, so an interaction
    /// whose other endpoint is unknown still counts.
    #[must_use]
    pub fn run(store: &EntityStore) -> Self {
        let destinations: HashSet<&str> = store
            .interactions()
            .iter()
            .map(|i| i.destination_process_id.as_str())
            .collect();
        let carried: HashSet<&str> = store.interactions().iter().map(|i| i.artifact_id.as_str()).collect();

        let report = Self {
            processes_without_destination: store
                .processes()
                .filter(|p| !destinations.contains(p.id.as_str()))
                .map(|p| UnreceivingProcess {
                    practice_id: p.practice_id.clone(),
                    process_id: p.id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            artifacts_without_source: store
                .artifacts()
                .filter(|a| !carried.contains(a.id.as_str()))
                .map(|a| UncarriedArtifact {
                    artifact_id: a.id.clone(),
                    name: a.name.clone(),
                })
                .collect(),
        };

        tracing::info!(
            processes_without_destination = report.processes_without_destination.len(),
            artifacts_without_source = report.artifacts_without_source.len(),
            "Audit complete"
        );
        report
    }

    /// True if nothing was found
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.processes_without_destination.is_empty() && self.artifacts_without_source.is_empty()
    }

    /// Every finding as one line of text, processes first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.processes_without_destination
            .iter()
            .map(ToString::to_string)
            .chain(self.artifacts_without_source.iter().map(ToString::to_string))
            .collect()
    }
}
