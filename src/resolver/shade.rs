//! Shade generation: one base color, many brightness levels.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::models::{RgbColor, WordPlacement};

/// A shade-generating function bound to one base color.
///
/// Called with a word and its layout metadata, returns one specific shade
/// of the base color. Boxed so resolvers can cache one per color
/// identifier regardless of where the function came from.
pub type ShadeFn = Box<dyn Fn(&str, &WordPlacement) -> RgbColor + Send + Sync>;

/// Factory turning a base color into a shade-generating function.
///
/// This is the seam for the rendering surface's own shade rule: the
/// shade-aware resolver only wires base colors through a factory and
/// caches the results. [`ToneShader`] is the built-in implementation.
pub trait ShadeFactory {
    /// Returns a function that picks one shade of `base` per invocation.
    fn shader(&self, base: RgbColor) -> ShadeFn;
}

/// Built-in single-tone shade factory.
///
/// Keeps the base color's hue and saturation and scales only its
/// brightness, with the multiplier drawn from `[floor, 1.0]`. The draw is
/// seeded from the engine seed combined with a stable hash of the word and
/// its placement, so the same word in the same spot always gets the same
/// shade while repeated words and different sizes vary.
#[derive(Debug, Clone, Copy)]
pub struct ToneShader {
    /// Lower bound of the brightness multiplier (clamped to 0.0-1.0).
    /// 1.0 disables shading and reproduces the base color.
    pub floor: f32,
}

impl ToneShader {
    /// Creates a factory with the given brightness floor.
    #[must_use]
    pub const fn with_floor(floor: f32) -> Self {
        Self { floor }
    }
}

impl Default for ToneShader {
    /// Default floor of 0.2 darkens down to one fifth of the base
    /// brightness, matching the usual single-tone word-cloud look.
    fn default() -> Self {
        Self { floor: 0.2 }
    }
}

impl ShadeFactory for ToneShader {
    fn shader(&self, base: RgbColor) -> ShadeFn {
        let floor = self.floor.clamp(0.0, 1.0);
        let (h, s, v) = base.to_hsv();
        Box::new(move |word, placement| {
            let mut rng = SmallRng::seed_from_u64(shade_seed(word, placement));
            let scale = rng.random_range(floor..=1.0);
            RgbColor::from_hsv(h, s, v * scale)
        })
    }
}

/// Stable per-(word, placement) seed, mixed with the engine seed.
fn shade_seed(word: &str, placement: &WordPlacement) -> u64 {
    let mut hasher = DefaultHasher::new();
    word.hash(&mut hasher);
    placement.font_size.hash(&mut hasher);
    placement.position.hash(&mut hasher);
    hasher.finish() ^ placement.seed
}
