//! The color value handed back to the rendering surface.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RgbColor;
use crate::palette;

/// A color in whatever representation the rendering surface accepts.
///
/// The exact resolver passes identifiers through verbatim and leaves
/// validation to the surface; the shade-aware resolver always produces
/// concrete triples. [`ColorSpec::to_rgb`] is the point where a passed-
/// through identifier is finally validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpec {
    /// An unparsed color identifier: a name ("red") or hex code ("#00ff00").
    Ident(String),
    /// A concrete RGB triple.
    Rgb(RgbColor),
}

impl ColorSpec {
    /// Resolves the spec to a concrete color.
    ///
    /// For `Rgb` this is a no-op; for `Ident` the identifier is parsed as a
    /// hex code or looked up in the named color table. This is where an
    /// invalid identifier stored by the exact resolver finally surfaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::{ColorSpec, RgbColor};
    ///
    /// let spec = ColorSpec::Ident("grey".to_string());
    /// assert_eq!(spec.to_rgb().unwrap(), RgbColor::new(128, 128, 128));
    ///
    /// let spec = ColorSpec::Ident("not-a-color".to_string());
    /// assert!(spec.to_rgb().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is neither a valid hex code nor a
    /// known color name.
    pub fn to_rgb(&self) -> Result<RgbColor> {
        match self {
            Self::Ident(ident) => palette::parse(ident),
            Self::Rgb(color) => Ok(*color),
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(ident) => write!(f, "{}", ident),
            Self::Rgb(color) => write!(f, "{}", color),
        }
    }
}

impl From<RgbColor> for ColorSpec {
    fn from(color: RgbColor) -> Self {
        Self::Rgb(color)
    }
}
