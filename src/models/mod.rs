//! Data models for colors, word groups, and placement metadata.
//!
//! This module contains the core data structures used throughout the
//! crate. Models are independent of the resolution logic.

pub mod group;
pub mod placement;
pub mod rgb;
pub mod spec;

// Re-export all model types
pub use group::ColorGroups;
pub use placement::{Orientation, WordPlacement};
pub use rgb::RgbColor;
pub use spec::ColorSpec;
