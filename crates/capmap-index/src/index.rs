//! Relationship index
//!
//! Provides [`RelationshipIndex`], the two derived mappings every layout and
//! filter works from. Iteration order of both mappings is first-occurrence
//! order in the source tables and is relied on for position assignment.

use crate::report::{Endpoint, IndexReport, ReferentialGap};
use capmap_model::{ArtifactId, EntityStore, PracticeId, ProcessId, ProcessPair};
use indexmap::IndexMap;
use serde::Serialize;

/// Process as listed under its practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessEntry {
    /// Process id
    pub id: ProcessId,
    /// Process name
    pub name: String,
}

/// Artifact in transit between two processes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    /// Artifact id as recorded on the interaction
    pub id: ArtifactId,
    /// Artifact name, `None` if the id did not resolve
    pub name: Option<String>,
}

/// Derived practice/process/artifact relationships of one load cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipIndex {
    practice_to_processes: IndexMap<PracticeId, Vec<ProcessEntry>>,
    #[serde(serialize_with = "serialize_pairs")]
    pair_to_artifacts: IndexMap<ProcessPair, Vec<ArtifactEntry>>,
    #[serde(skip)]
    process_owner: IndexMap<ProcessId, PracticeId>,
}

impl RelationshipIndex {
    /// Build both mappings from the store
    ///
    /// Practices are keyed in table order (a practice with no processes
    /// keeps an empty list); processes are listed in table order. Each
    /// interaction appends its artifact under its (source, destination)
    /// pair, repeats included.
    #[must_use]
    pub fn build(store: &EntityStore) -> (Self, IndexReport) {
        let mut report = IndexReport::default();
        let mut index = Self {
            practice_to_processes: store.practices().map(|p| (p.id.clone(), Vec::new())).collect(),
            ..Self::default()
        };

        for process in store.processes() {
            let Some(processes) = index.practice_to_processes.get_mut(&process.practice_id) else {
                report.record(ReferentialGap::UnknownPractice {
                    process_id: process.id.clone(),
                    practice_id: process.practice_id.clone(),
                });
                continue;
            };
            processes.push(ProcessEntry {
                id: process.id.clone(),
                name: process.name.clone(),
            });
            index
                .process_owner
                .insert(process.id.clone(), process.practice_id.clone());
        }

        for (row, interaction) in store.interactions().iter().enumerate() {
            let ends = [
                (Endpoint::Source, &interaction.source_process_id),
                (Endpoint::Destination, &interaction.destination_process_id),
            ];
            let dangling: Vec<_> = ends
                .into_iter()
                .filter(|(_, id)| !index.process_owner.contains_key(*id))
                .collect();
            if !dangling.is_empty() {
                for (endpoint, process_id) in dangling {
                    report.record(ReferentialGap::DanglingInteraction {
                        row,
                        endpoint,
                        process_id: process_id.clone(),
                    });
                }
                continue;
            }

            let name = store.artifact(interaction.artifact_id.as_str()).map(|a| a.name.clone());
            if name.is_none() {
                report.record(ReferentialGap::UnknownArtifact {
                    row,
                    artifact_id: interaction.artifact_id.clone(),
                });
            }

            index
                .pair_to_artifacts
                .entry(ProcessPair::new(
                    interaction.source_process_id.clone(),
                    interaction.destination_process_id.clone(),
                ))
                .or_default()
                .push(ArtifactEntry {
                    id: interaction.artifact_id.clone(),
                    name,
                });
        }

        tracing::info!(
            practices = index.practice_to_processes.len(),
            processes = index.process_owner.len(),
            pairs = index.pair_to_artifacts.len(),
            gaps = report.gaps.len(),
            "Relationship index built"
        );

        (index, report)
    }

    /// Practice → processes, in practice order
    pub fn practice_to_processes(&self) -> impl ExactSizeIterator<Item = (&PracticeId, &[ProcessEntry])> + '_ {
        self.practice_to_processes.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Practice ids in index order
    pub fn practices(&self) -> impl ExactSizeIterator<Item = &PracticeId> + '_ {
        self.practice_to_processes.keys()
    }

    /// Processes of one practice; empty for an unknown practice
    #[must_use]
    pub fn processes_of(&self, practice_id: &str) -> &[ProcessEntry] {
        self.practice_to_processes
            .get(practice_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the practice is indexed
    #[inline]
    #[must_use]
    pub fn contains_practice(&self, practice_id: &str) -> bool {
        self.practice_to_processes.contains_key(practice_id)
    }

    /// Owning practice of an indexed process
    #[inline]
    #[must_use]
    pub fn practice_of(&self, process_id: &str) -> Option<&PracticeId> {
        self.process_owner.get(process_id)
    }

    /// (source, destination) → artifacts, in first-occurrence order
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (&ProcessPair, &[ArtifactEntry])> + '_ {
        self.pair_to_artifacts.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Artifacts carried from `pair.source` to `pair.destination`
    #[inline]
    #[must_use]
    pub fn artifacts_between(&self, pair: &ProcessPair) -> Option<&[ArtifactEntry]> {
        self.pair_to_artifacts.get(pair).map(Vec::as_slice)
    }

    /// Number of distinct process pairs
    #[inline]
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_to_artifacts.len()
    }

    /// Number of indexed processes
    #[inline]
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.process_owner.len()
    }

    /// True if nothing was indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.practice_to_processes.is_empty() && self.pair_to_artifacts.is_empty()
    }

    /// Same index with every pair's direction swapped
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            practice_to_processes: self.practice_to_processes.clone(),
            pair_to_artifacts: self
                .pair_to_artifacts
                .iter()
                .map(|(pair, artifacts)| (pair.reversed(), artifacts.clone()))
                .collect(),
            process_owner: self.process_owner.clone(),
        }
    }
}

/// Pair keys are not strings, so the map goes out as a list of flows
fn serialize_pairs<S>(pairs: &IndexMap<ProcessPair, Vec<ArtifactEntry>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    struct Flow<'a> {
        source: &'a ProcessId,
        destination: &'a ProcessId,
        artifacts: &'a [ArtifactEntry],
    }

    serializer.collect_seq(pairs.iter().map(|(pair, artifacts)| Flow {
        source: &pair.source,
        destination: &pair.destination,
        artifacts,
    }))
}
