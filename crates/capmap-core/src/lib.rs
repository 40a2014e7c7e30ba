//! capmap Core - load-cycle pipeline
//!
//! Ties the workspace together for one load cycle:
//! - Validates configuration ([`CapmapConfig`], TOML)
//! - Indexes the store, assigns colors, lays out every row
//! - Audits the tables for dangling processes and artifacts
//! - Builds filtered practice views on demand
//!
//! # Example
//!
//! ```rust
//! use capmap_core::{CapmapConfig, GraphicsSnapshot, Selection, ViewSide};
//! use capmap_model::{Artifact, EntityStore, Interaction, Practice, Process};
//!
//! let store = EntityStore::new(
//!     vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
//!     vec![Process::new("A", "Budget", "P1"), Process::new("C", "Deliver", "P2")],
//!     vec![Artifact::new("X", "Roadmap")],
//!     vec![Interaction::new("X", "A", "C")],
//! )
//! .unwrap();
//!
//! let snapshot = GraphicsSnapshot::build(&store, &CapmapConfig::default()).unwrap();
//! let view = snapshot.view(&Selection::practices(["P1"]), ViewSide::Source);
//! assert_eq!(view.title, "Plan - AS - Source");
//! assert_eq!(view.artifact_rows[0].artifact, "Roadmap");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod audit;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod view;

// Re-exports for convenience
pub use audit::{AuditReport, UncarriedArtifact, UnreceivingProcess};
pub use capmap_filter::{FilterResult, PracticeEdge, Selection};
pub use config::{CapmapConfig, ColorConfig, ColorScheme};
pub use error::{ConfigError, CoreError};
pub use snapshot::GraphicsSnapshot;
pub use view::{ArtifactFlowRow, PracticeView, ProcessConnection, ViewSide};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running a load cycle
    pub use crate::{CapmapConfig, CoreError, GraphicsSnapshot, PracticeView, Selection, ViewSide};
    pub use capmap_model::{EntityStore, RawTables};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
