//! Named color database and color identifier parsing.
//!
//! This module provides access to the embedded table of CSS-style color
//! names and the parsing routine that turns a color identifier (a name or
//! a hex code) into a concrete [`RgbColor`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::RgbColor;

/// A single entry in the named color table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedColor {
    /// Lowercase color name (e.g., "red", "grey")
    name: String,
    /// Hex value (e.g., "#FF0000")
    hex: String,
}

/// Table schema from named_colors.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedColorTable {
    version: String,
    colors: Vec<NamedColor>,
}

/// Named color database with case-insensitive lookup.
///
/// The table is embedded in the binary at compile time. It covers the CSS
/// basic palette plus the common extended names, including the "gray"/"grey"
/// spelling pairs.
#[derive(Debug, Clone)]
pub struct NamedColorDb {
    /// Lowercase name -> concrete color
    lookup: HashMap<String, RgbColor>,
}

impl NamedColorDb {
    /// Loads the named color database from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("data/named_colors.json");
        let table: NamedColorTable =
            serde_json::from_str(json_data).context("Failed to parse embedded named_colors.json")?;

        let mut lookup = HashMap::new();
        for entry in &table.colors {
            let color = RgbColor::from_hex(&entry.hex)
                .with_context(|| format!("Bad hex value for named color '{}'", entry.name))?;
            lookup.insert(entry.name.to_ascii_lowercase(), color);
        }

        Ok(Self { lookup })
    }

    /// Returns the process-wide database, loading it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table fails to parse, which would mean a
    /// corrupt build asset.
    #[must_use]
    pub fn global() -> &'static Self {
        static DB: OnceLock<NamedColorDb> = OnceLock::new();
        DB.get_or_init(|| Self::load().expect("embedded named color table is valid"))
    }

    /// Looks up a color by name, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::palette::NamedColorDb;
    /// use wordtint::models::RgbColor;
    ///
    /// let db = NamedColorDb::global();
    /// assert_eq!(db.get("red"), Some(RgbColor::new(255, 0, 0)));
    /// assert_eq!(db.get("Grey"), Some(RgbColor::new(128, 128, 128)));
    /// assert_eq!(db.get("not-a-color"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RgbColor> {
        self.lookup.get(&name.trim().to_ascii_lowercase()).copied()
    }

    /// Number of names in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Parses a color identifier into a concrete [`RgbColor`].
///
/// Hex codes ("#RRGGBB", "#RGB", or the bare digit forms) are parsed
/// directly; anything else is looked up in the named color table. This is
/// the validation step both resolver variants delegate to: eagerly at
/// construction for the shade-aware variant, lazily at application time for
/// the exact variant.
///
/// # Examples
///
/// ```
/// use wordtint::palette;
/// use wordtint::models::RgbColor;
///
/// assert_eq!(palette::parse("#00ff00").unwrap(), RgbColor::new(0, 255, 0));
/// assert_eq!(palette::parse("red").unwrap(), RgbColor::new(255, 0, 0));
/// assert!(palette::parse("definitely-not-a-color").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the identifier is neither a valid hex code nor a
/// known color name.
pub fn parse(ident: &str) -> Result<RgbColor> {
    let trimmed = ident.trim();

    if trimmed.starts_with('#') {
        return RgbColor::from_hex(trimmed)
            .with_context(|| format!("Invalid color spec '{ident}'"));
    }

    // Bare hex without the '#' prefix, e.g. "00ff00"
    if matches!(trimmed.len(), 3 | 6) && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return RgbColor::from_hex(trimmed);
    }

    NamedColorDb::global().get(trimmed).with_context(|| {
        format!("Invalid color spec '{ident}': not a hex code or a known color name")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_table() {
        let db = NamedColorDb::load().expect("Failed to load named color table");
        assert!(!db.is_empty());
        assert!(db.len() > 100);
    }

    #[test]
    fn test_basic_palette_present() {
        let db = NamedColorDb::global();
        assert_eq!(db.get("black"), Some(RgbColor::new(0, 0, 0)));
        assert_eq!(db.get("white"), Some(RgbColor::new(255, 255, 255)));
        assert_eq!(db.get("red"), Some(RgbColor::new(255, 0, 0)));
        assert_eq!(db.get("lime"), Some(RgbColor::new(0, 255, 0)));
        assert_eq!(db.get("blue"), Some(RgbColor::new(0, 0, 255)));
        assert_eq!(db.get("green"), Some(RgbColor::new(0, 128, 0)));
    }

    #[test]
    fn test_gray_spellings_agree() {
        let db = NamedColorDb::global();
        assert_eq!(db.get("gray"), db.get("grey"));
        assert_eq!(db.get("darkslategray"), db.get("darkslategrey"));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let db = NamedColorDb::global();
        assert_eq!(db.get("Red"), db.get("red"));
        assert_eq!(db.get("STEELBLUE"), db.get("steelblue"));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(NamedColorDb::global().get("blurple"), None);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse("#00FF00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(parse("00ff00").unwrap(), RgbColor::new(0, 255, 0));
        assert_eq!(parse("#0f0").unwrap(), RgbColor::new(0, 255, 0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse("grey").unwrap(), RgbColor::new(128, 128, 128));
        assert_eq!(parse(" tomato ").unwrap(), RgbColor::new(255, 99, 71));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("").is_err());
        assert!(parse("#GGGGGG").is_err());
        assert!(parse("no-such-color").is_err());
        let err = parse("blurple").unwrap_err();
        assert!(err.to_string().contains("blurple"));
    }
}
