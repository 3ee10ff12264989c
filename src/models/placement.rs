//! Layout metadata the engine passes alongside each placed word.

use serde::{Deserialize, Serialize};

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Word drawn left to right
    #[default]
    Horizontal,
    /// Word drawn rotated 90 degrees
    Vertical,
}

/// Per-word layout metadata supplied by the layout engine.
///
/// Color resolution never depends on any of these fields; the exact
/// resolver ignores them entirely, and the shade machinery folds the font
/// size and engine seed into its shade choice so that repeated words and
/// words of different sizes can receive distinct shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WordPlacement {
    /// Font size chosen by the layout engine
    pub font_size: u32,
    /// Upper-left position of the word in the canvas, (x, y)
    pub position: (u32, u32),
    /// Word orientation
    pub orientation: Orientation,
    /// Engine random state, carried through to shade generation
    pub seed: u64,
}

impl WordPlacement {
    /// Creates a placement with the given font size and default everything
    /// else. Convenient where only the size matters to the caller.
    #[must_use]
    pub fn with_font_size(font_size: u32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}
