//! capmap Relationship Indexer
//!
//! Derives the relationship mappings of a capability model from its
//! [`EntityStore`](capmap_model::EntityStore).
//!
//! # Overview
//!
//! - **PracticeToProcesses**: practice id → ordered process entries
//! - **ProcessPairToArtifacts**: (source, destination) → artifacts in transit
//! - [`IndexReport`]: referential gaps found along the way (never fatal)
//!
//! # Example
//!
//! ```rust
//! use capmap_index::RelationshipIndex;
//! use capmap_model::{Artifact, EntityStore, Interaction, Practice, Process, ProcessPair};
//!
//! let store = EntityStore::new(
//!     vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
//!     vec![Process::new("A", "Budget", "P1"), Process::new("C", "Deliver", "P2")],
//!     vec![Artifact::new("X", "Roadmap")],
//!     vec![Interaction::new("X", "A", "C")],
//! )
//! .unwrap();
//!
//! let (index, report) = RelationshipIndex::build(&store);
//! assert!(report.is_clean());
//! assert_eq!(index.artifacts_between(&ProcessPair::new("A", "C")).unwrap().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod index;
mod report;

// Re-exports
pub use index::{ArtifactEntry, ProcessEntry, RelationshipIndex};
pub use report::{Endpoint, IndexReport, ReferentialGap};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
