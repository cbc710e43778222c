#![no_std] // The analyzer seam must stay usable without std

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod analysis;
pub mod morphology;

// Re-export core types for convenience
pub use analysis::{Analyzer, Parse, TaggedForm};
pub use morphology::*;

pub mod model;
pub use model::*;
