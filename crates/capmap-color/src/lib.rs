//! capmap Color Assigner
//!
//! Maps each practice to a render color.
//!
//! # Core Concepts
//!
//! - [`ColorAssigner`]: trait for assignment schemes
//! - [`PaletteAssigner`]: deterministic round-robin over [`NEON_PALETTE`]
//! - [`UniquePastelAssigner`]: random pastels, no repeats within one pass, bounded retries
//! - [`ColorSampler`]: candidate source for the random scheme
//! - [`PracticeColors`]: the resulting practice → color mapping
//!
//! # Example
//!
//! ```rust
//! use capmap_color::{ColorAssigner, PaletteAssigner, PastelSampler, UniquePastelAssigner};
//! use capmap_model::PracticeId;
//!
//! let practices = vec![PracticeId::new("P1"), PracticeId::new("P2")];
//!
//! let fixed = PaletteAssigner::new().assign(&practices).unwrap();
//! assert_eq!(fixed.get("P1").unwrap().as_str(), "#FF00FF");
//!
//! let mut random = UniquePastelAssigner::new(PastelSampler::seeded(42));
//! let pastel = random.assign(&practices).unwrap();
//! assert_ne!(pastel.get("P1"), pastel.get("P2"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod assign;
mod color;
mod error;
mod palette;
mod pastel;

// Re-exports
pub use assign::{ColorAssigner, PracticeColors};
pub use color::{channel_to_byte, hls_to_rgb, Color};
pub use error::ColorError;
pub use palette::{PaletteAssigner, NEON_PALETTE};
pub use pastel::{ColorSampler, PastelSampler, UniquePastelAssigner, DEFAULT_MAX_ATTEMPTS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
