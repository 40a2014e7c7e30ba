//! capmap Graph Filter
//!
//! Answers "what does this selection talk to?" over the process interaction
//! graph, in either direction.
//!
//! # Core Concepts
//!
//! - [`InteractionGraph`]: petgraph `DiGraph` of processes, one edge per process pair
//! - [`Selection`]: practices or processes to start from; empty means everything
//! - [`FilterResult`]: both sides' practices and processes, practice edges, walked flows
//!
//! # Example
//!
//! ```rust
//! use capmap_filter::{InteractionGraph, PracticeEdge, Selection};
//! use capmap_index::RelationshipIndex;
//! use capmap_model::{Artifact, EntityStore, Interaction, Practice, Process};
//!
//! let store = EntityStore::new(
//!     vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
//!     vec![Process::new("A", "Budget", "P1"), Process::new("C", "Deliver", "P2")],
//!     vec![Artifact::new("X", "Roadmap")],
//!     vec![Interaction::new("X", "A", "C")],
//! )
//! .unwrap();
//! let (index, _) = RelationshipIndex::build(&store);
//! let graph = InteractionGraph::from_index(&index);
//!
//! let forward = graph.forward(&Selection::practices(["P1"]));
//! assert_eq!(forward.relationships, vec![PracticeEdge::new("P1", "P2")]);
//!
//! let reverse = graph.reverse(&Selection::practices(["P2"]));
//! assert_eq!(reverse.source_practices[0].as_str(), "P1");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod graph;
mod result;
mod selection;

// Re-exports
pub use graph::InteractionGraph;
pub use petgraph::Direction;
pub use result::{FilterResult, Flow, PracticeEdge};
pub use selection::Selection;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
