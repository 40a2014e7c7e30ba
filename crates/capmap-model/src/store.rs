//! Entity store
//!
//! Provides [`EntityStore`], the fully materialized tables of one load cycle.
//! The store is immutable once built; every derived structure is recomputed
//! from it.

use crate::error::StoreError;
use crate::ids::{ArtifactId, PracticeId, ProcessId, ValueStreamId};
use crate::raw::{cell_text, RawTables};
use crate::record::{Artifact, Interaction, Practice, Process};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Source table of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Table {
    /// Practices sheet
    Practices,
    /// Processes sheet
    Processes,
    /// Artifacts sheet
    Artifacts,
    /// Process interactions sheet
    Interactions,
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Practices => "practices",
            Self::Processes => "processes",
            Self::Artifacts => "artifacts",
            Self::Interactions => "interactions",
        };
        f.write_str(name)
    }
}

/// Why a raw row was kept out of the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuarantineReason {
    /// Row has no usable id
    MissingId,
    /// Process row has no owning practice
    MissingPracticeId,
    /// Interaction row lacks one of its three references
    MissingField(&'static str),
    /// Id already used by an earlier row of the same table
    DuplicateId(String),
}

impl Display for QuarantineReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => f.write_str("missing id"),
            Self::MissingPracticeId => f.write_str("missing practice_id"),
            Self::MissingField(field) => write!(f, "missing {field}"),
            Self::DuplicateId(id) => write!(f, "duplicate id {id}"),
        }
    }
}

/// Raw row rejected at the store boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarantinedRow {
    /// Table the row came from
    pub table: Table,
    /// Zero-based row position in that table
    pub row: usize,
    /// Rejection reason
    pub reason: QuarantineReason,
}

/// Store plus the rows that did not make it in
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Typed tables
    pub store: EntityStore,
    /// Rejected rows, in table then row order
    pub quarantined: Vec<QuarantinedRow>,
}

/// Typed, id-indexed tables of one load cycle
///
/// Tables keep source order; ids are unique within each table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    practices: IndexMap<PracticeId, Practice>,
    processes: IndexMap<ProcessId, Process>,
    artifacts: IndexMap<ArtifactId, Artifact>,
    interactions: Vec<Interaction>,
}

impl EntityStore {
    /// Build from typed records
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if an id repeats within a table.
    pub fn new(
        practices: impl IntoIterator<Item = Practice>,
        processes: impl IntoIterator<Item = Process>,
        artifacts: impl IntoIterator<Item = Artifact>,
        interactions: impl IntoIterator<Item = Interaction>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            practices: unique_by_id(Table::Practices, practices, |p| p.id.clone())?,
            processes: unique_by_id(Table::Processes, processes, |p| p.id.clone())?,
            artifacts: unique_by_id(Table::Artifacts, artifacts, |a| a.id.clone())?,
            interactions: interactions.into_iter().collect(),
        })
    }

    /// Convert raw rows, quarantining the malformed ones
    ///
    /// Never fails: a bad row is reported in [`LoadOutcome::quarantined`]
    /// and the rest of the load proceeds.
    #[must_use]
    pub fn load(tables: &RawTables) -> LoadOutcome {
        let mut quarantined = Vec::new();
        let mut store = Self::default();

        for (row, raw) in tables.practices.iter().enumerate() {
            let Some(id) = cell_text(raw.id.as_ref()) else {
                quarantined.push(QuarantinedRow { table: Table::Practices, row, reason: QuarantineReason::MissingId });
                continue;
            };
            let name = cell_text(raw.name.as_ref()).unwrap_or_default();
            if let Err(reason) = insert_unique(&mut store.practices, PracticeId::new(id), |id| Practice { id, name }) {
                quarantined.push(QuarantinedRow { table: Table::Practices, row, reason });
            }
        }

        for (row, raw) in tables.processes.iter().enumerate() {
            let Some(id) = cell_text(raw.id.as_ref()) else {
                quarantined.push(QuarantinedRow { table: Table::Processes, row, reason: QuarantineReason::MissingId });
                continue;
            };
            let Some(practice_id) = cell_text(raw.practice_id.as_ref()) else {
                quarantined.push(QuarantinedRow {
                    table: Table::Processes,
                    row,
                    reason: QuarantineReason::MissingPracticeId,
                });
                continue;
            };
            let name = cell_text(raw.name.as_ref()).unwrap_or_default();
            let value_stream_id = cell_text(raw.value_stream_id.as_ref()).map(ValueStreamId::new);
            let inserted = insert_unique(&mut store.processes, ProcessId::new(id), |id| Process {
                id,
                name,
                practice_id: PracticeId::new(practice_id),
                value_stream_id,
            });
            if let Err(reason) = inserted {
                quarantined.push(QuarantinedRow { table: Table::Processes, row, reason });
            }
        }

        for (row, raw) in tables.artifacts.iter().enumerate() {
            let Some(id) = cell_text(raw.id.as_ref()) else {
                quarantined.push(QuarantinedRow { table: Table::Artifacts, row, reason: QuarantineReason::MissingId });
                continue;
            };
            let name = cell_text(raw.name.as_ref()).unwrap_or_default();
            if let Err(reason) = insert_unique(&mut store.artifacts, ArtifactId::new(id), |id| Artifact { id, name }) {
                quarantined.push(QuarantinedRow { table: Table::Artifacts, row, reason });
            }
        }

        for (row, raw) in tables.interactions.iter().enumerate() {
            let fields = (
                cell_text(raw.artifact_id.as_ref()),
                cell_text(raw.source_process_id.as_ref()),
                cell_text(raw.destination_process_id.as_ref()),
            );
            let reason = match fields {
                (Some(artifact), Some(source), Some(destination)) => {
                    store.interactions.push(Interaction::new(artifact, source, destination));
                    continue;
                }
                (None, _, _) => QuarantineReason::MissingField("artifact_id"),
                (_, None, _) => QuarantineReason::MissingField("source_process_id"),
                (_, _, None) => QuarantineReason::MissingField("destination_process_id"),
            };
            quarantined.push(QuarantinedRow { table: Table::Interactions, row, reason });
        }

        for q in &quarantined {
            tracing::warn!("Quarantined {} row {}: {}", q.table, q.row, q.reason);
        }
        tracing::info!(
            practices = store.practices.len(),
            processes = store.processes.len(),
            artifacts = store.artifacts.len(),
            interactions = store.interactions.len(),
            quarantined = quarantined.len(),
            "Entity store loaded"
        );

        LoadOutcome { store, quarantined }
    }

    /// Practices in table order
    pub fn practices(&self) -> impl ExactSizeIterator<Item = &Practice> + '_ {
        self.practices.values()
    }

    /// Processes in table order
    pub fn processes(&self) -> impl ExactSizeIterator<Item = &Process> + '_ {
        self.processes.values()
    }

    /// Artifacts in table order
    pub fn artifacts(&self) -> impl ExactSizeIterator<Item = &Artifact> + '_ {
        self.artifacts.values()
    }

    /// Interactions in table order
    #[inline]
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    /// Lookup practice by id
    #[inline]
    #[must_use]
    pub fn practice(&self, id: &str) -> Option<&Practice> {
        self.practices.get(id)
    }

    /// Lookup process by id
    #[inline]
    #[must_use]
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.get(id)
    }

    /// Lookup artifact by id
    #[inline]
    #[must_use]
    pub fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.get(id)
    }

    /// Position of a practice in table order
    #[inline]
    #[must_use]
    pub fn practice_position(&self, id: &str) -> Option<usize> {
        self.practices.get_index_of(id)
    }

    /// True when every table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.practices.is_empty()
            && self.processes.is_empty()
            && self.artifacts.is_empty()
            && self.interactions.is_empty()
    }
}

fn unique_by_id<K, V>(
    table: Table,
    rows: impl IntoIterator<Item = V>,
    key: impl Fn(&V) -> K,
) -> Result<IndexMap<K, V>, StoreError>
where
    K: std::hash::Hash + Eq + Display,
{
    let mut map = IndexMap::new();
    for row in rows {
        match map.entry(key(&row)) {
            Entry::Occupied(e) => {
                return Err(StoreError::DuplicateId {
                    table,
                    id: e.key().to_string(),
                })
            }
            Entry::Vacant(e) => {
                e.insert(row);
            }
        }
    }
    Ok(map)
}

fn insert_unique<K, V>(
    map: &mut IndexMap<K, V>,
    id: K,
    make: impl FnOnce(K) -> V,
) -> Result<(), QuarantineReason>
where
    K: std::hash::Hash + Eq + Clone + Display,
{
    match map.entry(id) {
        Entry::Occupied(e) => Err(QuarantineReason::DuplicateId(e.key().to_string())),
        Entry::Vacant(e) => {
            let id = e.key().clone();
            e.insert(make(id));
            Ok(())
        }
    }
}
