//! Testing utilities for the capmap workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use capmap_index::RelationshipIndex;
use capmap_model::{Artifact, EntityStore, Interaction, Practice, Process};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, once per binary.
///
/// Honors `RUST_LOG`; defaults to `debug` for capmap crates.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("capmap=debug,warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// P1 {A, B}, P2 {C}; A sends X to C.
pub fn two_practice_store() -> EntityStore {
    EntityStore::new(
        vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
        vec![
            Process::new("A", "Budget", "P1"),
            Process::new("B", "Forecast", "P1"),
            Process::new("C", "Deliver", "P2"),
        ],
        vec![Artifact::new("X", "Roadmap")],
        vec![Interaction::new("X", "A", "C")],
    )
    .unwrap()
}

/// Three practices in a loop with a fan-out:
///
/// ```text
/// P1 {A, B}   P2 {C, D}   P3 {E}
/// A -X-> C, A -Y-> C, B -Z-> E, C -W-> E, E -V-> A
/// ```
///
/// P2 has no process sending to P1; D takes part in nothing.
pub fn three_practice_store() -> EntityStore {
    EntityStore::new(
        vec![
            Practice::new("P1", "Plan"),
            Practice::new("P2", "Build"),
            Practice::new("P3", "Run"),
        ],
        vec![
            Process::new("A", "Budget", "P1").with_value_stream("VS1"),
            Process::new("B", "Forecast", "P1").with_value_stream("VS1"),
            Process::new("C", "Deliver", "P2").with_value_stream("VS2"),
            Process::new("D", "Test", "P2"),
            Process::new("E", "Operate", "P3").with_value_stream("VS1"),
        ],
        vec![
            Artifact::new("X", "Roadmap"),
            Artifact::new("Y", "Budget plan"),
            Artifact::new("Z", "Forecast"),
            Artifact::new("W", "Release"),
            Artifact::new("V", "Incident"),
        ],
        vec![
            Interaction::new("X", "A", "C"),
            Interaction::new("Y", "A", "C"),
            Interaction::new("Z", "B", "E"),
            Interaction::new("W", "C", "E"),
            Interaction::new("V", "E", "A"),
        ],
    )
    .unwrap()
}

/// Store plus its index, ignoring the gap report.
pub fn indexed(store: &EntityStore) -> RelationshipIndex {
    RelationshipIndex::build(store).0
}
