//! Grouped per-word color resolution for word-cloud rendering.
//!
//! An external layout engine places words; this crate decides what color
//! each placed word is drawn in, from a caller-supplied mapping of colors
//! to word lists plus a default for everything else. The exact resolver
//! returns each group's color verbatim; the shade-aware resolver returns
//! per-word shades of it. A small frequency helper covers the
//! text-to-counts step for callers starting from raw text.

// Module declarations
pub mod models;
pub mod palette;
pub mod resolver;
pub mod text;
