//! Color group mapping: which words belong to which color.

use anyhow::Result;
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered mapping from color identifier to member words.
///
/// Built once from caller configuration and read-only afterwards. The
/// insertion order of the groups is significant: when a word is listed
/// under more than one color, the last group to list it owns it (see
/// [`ColorGroups::invert`]).
///
/// Color identifiers are anything the rendering surface accepts, typically
/// a color name ("red") or a hex code ("#00ff00"). Identifiers are not
/// validated here; validation happens when a resolver is built from the
/// groups, or when the surface applies the resolved color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorGroups {
    groups: IndexMap<String, Vec<String>>,
}

impl ColorGroups {
    /// Creates an empty group mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a group mapping from (color, words) pairs, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::ColorGroups;
    ///
    /// let groups = ColorGroups::from_pairs([
    ///     ("green", vec!["simple", "easy"]),
    ///     ("red", vec!["complex", "hard"]),
    /// ]).unwrap();
    /// assert_eq!(groups.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any color identifier is empty.
    pub fn from_pairs<C, W, I>(pairs: I) -> Result<Self>
    where
        C: Into<String>,
        W: Into<String>,
        I: IntoIterator<Item = (C, Vec<W>)>,
    {
        let mut groups = Self::new();
        for (color, words) in pairs {
            groups.insert(color, words.into_iter().map(Into::into).collect())?;
        }
        Ok(groups)
    }

    /// Adds a group, replacing any existing group with the same identifier.
    ///
    /// Word lists may be empty, and the same word may appear under several
    /// colors; neither is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the color identifier is empty.
    pub fn insert(&mut self, color: impl Into<String>, words: Vec<String>) -> Result<()> {
        let color = color.into();
        if color.trim().is_empty() {
            anyhow::bail!("Color identifier cannot be empty");
        }
        self.groups.insert(color, words);
        Ok(())
    }

    /// Iterates groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.groups
            .iter()
            .map(|(color, words)| (color.as_str(), words.as_slice()))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Builds the word-to-color index by inverting the mapping.
    ///
    /// Each word maps to the identifier of the group that owns it. When a
    /// word appears in more than one group, the last group in insertion
    /// order wins and a warning is logged; the result is deterministic for
    /// a given input order.
    #[must_use]
    pub fn invert(&self) -> HashMap<String, String> {
        let mut index = HashMap::new();
        for (color, words) in &self.groups {
            for word in words {
                if let Some(previous) = index.insert(word.clone(), color.clone()) {
                    if previous != *color {
                        warn!(
                            "Word '{}' is listed under both '{}' and '{}'; using '{}'",
                            word, previous, color, color
                        );
                    }
                }
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColorGroups {
        ColorGroups::from_pairs([
            ("green", vec!["simple", "easy"]),
            ("red", vec!["complex", "hard"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let groups = sample();
        let colors: Vec<&str> = groups.iter().map(|(color, _)| color).collect();
        assert_eq!(colors, vec!["green", "red"]);
    }

    #[test]
    fn test_insert_empty_identifier_rejected() {
        let mut groups = ColorGroups::new();
        assert!(groups.insert("", vec![]).is_err());
        assert!(groups.insert("   ", vec![]).is_err());
    }

    #[test]
    fn test_empty_word_list_allowed() {
        let mut groups = ColorGroups::new();
        groups.insert("blue", vec![]).unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups.invert().is_empty());
    }

    #[test]
    fn test_invert_flat_index() {
        let index = sample().invert();
        assert_eq!(index.get("simple").map(String::as_str), Some("green"));
        assert_eq!(index.get("hard").map(String::as_str), Some("red"));
        assert_eq!(index.get("banana"), None);
    }

    #[test]
    fn test_invert_last_writer_wins() {
        let groups = ColorGroups::from_pairs([
            ("green", vec!["shared", "simple"]),
            ("red", vec!["shared"]),
        ])
        .unwrap();
        let index = groups.invert();
        assert_eq!(index.get("shared").map(String::as_str), Some("red"));
        assert_eq!(index.get("simple").map(String::as_str), Some("green"));
    }

    #[test]
    fn test_invert_is_stable() {
        let groups = ColorGroups::from_pairs([
            ("green", vec!["shared"]),
            ("red", vec!["shared"]),
        ])
        .unwrap();
        let first = groups.invert();
        for _ in 0..10 {
            assert_eq!(groups.invert(), first);
        }
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let json = r##"{
            "#00ff00": ["beautiful", "explicit", "simple"],
            "red": ["ugly", "implicit", "complex"]
        }"##;
        let groups: ColorGroups = serde_json::from_str(json).unwrap();
        let colors: Vec<&str> = groups.iter().map(|(color, _)| color).collect();
        assert_eq!(colors, vec!["#00ff00", "red"]);
        assert_eq!(
            groups.invert().get("ugly").map(String::as_str),
            Some("red")
        );
    }
}
