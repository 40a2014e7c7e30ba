//! capmap Entity Store
//!
//! Typed tables describing a capability model.
//!
//! # Core Concepts
//!
//! - [`Practice`]: top-level capability grouping
//! - [`Process`]: operational step owned by one practice, optionally tagged with a value stream
//! - [`Artifact`]: object exchanged between processes
//! - [`Interaction`]: directed artifact flow from one process to another
//! - [`ProcessPair`]: composite (source, destination) key
//! - [`EntityStore`]: the validated tables of one load cycle
//!
//! # Example
//!
//! ```rust
//! use capmap_model::{EntityStore, Interaction, Practice, Process, Artifact};
//!
//! let store = EntityStore::new(
//!     vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
//!     vec![Process::new("A", "Budget", "P1"), Process::new("C", "Deliver", "P2")],
//!     vec![Artifact::new("X", "Roadmap")],
//!     vec![Interaction::new("X", "A", "C")],
//! )
//! .unwrap();
//!
//! assert_eq!(store.practices().len(), 2);
//! assert_eq!(store.process("C").unwrap().practice_id.as_str(), "P2");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod ids;
mod raw;
mod record;
mod store;

// Re-exports
pub use error::StoreError;
pub use ids::{ArtifactId, PracticeId, ProcessId, ProcessPair, ValueStreamId};
pub use raw::{RawArtifact, RawCell, RawInteraction, RawPractice, RawProcess, RawTables};
pub use record::{Artifact, Interaction, Practice, Process};
pub use store::{EntityStore, LoadOutcome, QuarantineReason, QuarantinedRow, Table};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
