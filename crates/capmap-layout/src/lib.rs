//! capmap Layout Engine
//!
//! Turns an indexed capability model into positioned, colored boxes.
//!
//! # Core Concepts
//!
//! - [`LayoutBox`]: render-ready rectangle, never mutated after creation
//! - [`practice_rows`] / [`process_rows`]: the four-row pixel grid
//! - [`center_row`]: re-centers a subset on one row in `[0, 1]` space
//! - [`layout_value_streams`]: processes in value-stream column bands
//! - [`legend_entries`]: wrapped practice key
//! - [`LayoutConfig`]: every constant, with defaults
//!
//! # Example
//!
//! ```rust
//! use capmap_color::{ColorAssigner, PaletteAssigner};
//! use capmap_index::RelationshipIndex;
//! use capmap_layout::{center_row, fitted_spacing, practice_rows, LayoutConfig};
//! use capmap_model::{EntityStore, Practice};
//!
//! let store = EntityStore::new(
//!     vec![Practice::new("P1", "Plan"), Practice::new("P2", "Build")],
//!     vec![],
//!     vec![],
//!     vec![],
//! )
//! .unwrap();
//! let (index, _) = RelationshipIndex::build(&store);
//! let colors = PaletteAssigner::new().assign(index.practices()).unwrap();
//! let config = LayoutConfig::default();
//!
//! let rows = practice_rows(&store, &index, &colors, &config.grid);
//! assert_eq!(rows.top[1].x, 300.0);
//!
//! let spacing = fitted_spacing(&[rows.top.len()]);
//! let centered = center_row(&rows.top, 0.9, spacing, config.centered.height_scale);
//! assert!((centered[0].x - 1.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod centered;
mod config;
mod error;
mod grid;
mod layout_box;
mod legend;
mod value_stream;

// Re-exports
pub use centered::{center_row, centered_xs, fitted_spacing};
pub use config::{CenteredRows, GridConstants, LayoutConfig, LegendConstants, ValueStreamConstants};
pub use error::LayoutError;
pub use grid::{practice_rows, process_rows, GridRows};
pub use layout_box::{LayoutBox, LegendEntry, StreamBox};
pub use legend::legend_entries;
pub use value_stream::layout_value_streams;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
