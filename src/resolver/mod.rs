//! Word-to-color resolution for placed words.
//!
//! The layout engine invokes a [`ColorFunc`] once per placed word during
//! rendering or recoloring. Two resolver implementations are provided:
//! [`ExactGroupedColors`] hands every grouped word its group's color
//! verbatim, and [`ShadedGroupedColors`] hands it one of many shades of
//! that color via a cached shade function per group.

pub mod shade;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;

use crate::models::{ColorGroups, ColorSpec, WordPlacement};
use crate::palette;
use self::shade::{ShadeFactory, ShadeFn, ToneShader};

/// The callback shape the layout engine invokes once per placed word.
///
/// Implementations must be deterministic for a given word and placement
/// and must not mutate; resolvers are shared across rendering passes and
/// may be called concurrently.
pub trait ColorFunc {
    /// Returns the color to render `word` with.
    fn color(&self, word: &str, placement: &WordPlacement) -> ColorSpec;
}

/// Resolver assigning each grouped word the exact color of its group.
///
/// Color identifiers are stored and returned verbatim, original casing
/// included; nothing is validated here. An invalid identifier surfaces
/// only when the rendering surface applies the returned spec
/// ([`ColorSpec::to_rgb`]).
///
/// # Examples
///
/// ```
/// use wordtint::models::{ColorGroups, ColorSpec, WordPlacement};
/// use wordtint::resolver::{ColorFunc, ExactGroupedColors};
///
/// let groups = ColorGroups::from_pairs([
///     ("green", vec!["simple", "easy"]),
///     ("red", vec!["complex", "hard"]),
/// ]).unwrap();
/// let resolver = ExactGroupedColors::new(&groups, "grey");
///
/// let placement = WordPlacement::default();
/// assert_eq!(resolver.color("simple", &placement), ColorSpec::Ident("green".into()));
/// assert_eq!(resolver.color("banana", &placement), ColorSpec::Ident("grey".into()));
/// ```
#[derive(Debug, Clone)]
pub struct ExactGroupedColors {
    /// Inverted word-to-color index, built once at construction
    word_to_color: HashMap<String, String>,
    /// Identifier for words absent from every group
    default_color: String,
}

impl ExactGroupedColors {
    /// Builds the resolver by inverting the group mapping.
    ///
    /// Infallible: identifiers are taken on trust and validated only when
    /// applied. Words listed under several colors go to the last group in
    /// mapping order.
    #[must_use]
    pub fn new(groups: &ColorGroups, default_color: impl Into<String>) -> Self {
        Self {
            word_to_color: groups.invert(),
            default_color: default_color.into(),
        }
    }
}

impl ColorFunc for ExactGroupedColors {
    fn color(&self, word: &str, _placement: &WordPlacement) -> ColorSpec {
        let ident = self.word_to_color.get(word).unwrap_or(&self.default_color);
        ColorSpec::Ident(ident.clone())
    }
}

/// Resolver assigning each grouped word a shade of its group's color.
///
/// Every color identifier is parsed at construction time and handed to a
/// [`ShadeFactory`], producing one cached shade function per group; an
/// invalid identifier therefore fails fast instead of at render time.
/// Queries return concrete RGB values.
pub struct ShadedGroupedColors {
    /// Word -> index into `shaders`
    word_to_shader: HashMap<String, usize>,
    /// One cached shade function per group, in group order
    shaders: Vec<ShadeFn>,
    /// Shade function for words absent from every group
    default_shader: ShadeFn,
}

impl ShadedGroupedColors {
    /// Builds the resolver with the built-in [`ToneShader`] factory.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::ColorGroups;
    /// use wordtint::resolver::ShadedGroupedColors;
    ///
    /// let groups = ColorGroups::from_pairs([
    ///     ("#00ff00", vec!["simple", "easy"]),
    ///     ("red", vec!["complex", "hard"]),
    /// ]).unwrap();
    /// let resolver = ShadedGroupedColors::new(&groups, "grey").unwrap();
    /// # let _ = resolver;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any group color or the default color is not a
    /// valid color identifier.
    pub fn new(groups: &ColorGroups, default_color: &str) -> Result<Self> {
        Self::with_factory(groups, default_color, &ToneShader::default())
    }

    /// Builds the resolver with a caller-supplied shade factory.
    ///
    /// The factory is invoked once per distinct color identifier (group
    /// colors plus the default) and the resulting functions are cached for
    /// the lifetime of the resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if any group color or the default color is not a
    /// valid color identifier.
    pub fn with_factory(
        groups: &ColorGroups,
        default_color: &str,
        factory: &impl ShadeFactory,
    ) -> Result<Self> {
        let mut shaders = Vec::with_capacity(groups.len());
        let mut slot_by_color = HashMap::with_capacity(groups.len());
        for (color, _) in groups.iter() {
            let base = palette::parse(color)
                .with_context(|| format!("Invalid color spec '{color}' in group mapping"))?;
            slot_by_color.insert(color.to_string(), shaders.len());
            shaders.push(factory.shader(base));
        }

        let index = groups.invert();
        let mut word_to_shader = HashMap::with_capacity(index.len());
        for (word, color) in index {
            if let Some(&slot) = slot_by_color.get(&color) {
                word_to_shader.insert(word, slot);
            }
        }

        let default_base = palette::parse(default_color)
            .with_context(|| format!("Invalid default color spec '{default_color}'"))?;

        Ok(Self {
            word_to_shader,
            shaders,
            default_shader: factory.shader(default_base),
        })
    }
}

impl ColorFunc for ShadedGroupedColors {
    fn color(&self, word: &str, placement: &WordPlacement) -> ColorSpec {
        let shader = self
            .word_to_shader
            .get(word)
            .and_then(|&slot| self.shaders.get(slot))
            .unwrap_or(&self.default_shader);
        ColorSpec::Rgb(shader(word, placement))
    }
}

impl fmt::Debug for ShadedGroupedColors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadedGroupedColors")
            .field("words", &self.word_to_shader.len())
            .field("shaders", &self.shaders.len())
            .finish_non_exhaustive()
    }
}

/// Applies a color function to a list of placed words.
///
/// This is the loop the layout engine runs during a recolor pass, provided
/// for hosts that hold a placed-word list without a full engine. Word
/// order is preserved.
#[must_use]
pub fn recolor<F: ColorFunc>(
    placed: &[(String, WordPlacement)],
    color_func: &F,
) -> Vec<(String, ColorSpec)> {
    placed
        .iter()
        .map(|(word, placement)| (word.clone(), color_func.color(word, placement)))
        .collect()
}
