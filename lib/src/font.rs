//! Font table data model.
//!
//! A font maps an uppercase character (plus space) to a fixed-height list
//! of row strings. The table resolves style names for the compositor and
//! backs the font listing endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fonts;

/// Mapping from character to its glyph rows. All rows within one font
/// share the font's cell height.
pub type GlyphMap = HashMap<char, Vec<String>>;

/// Listing entry for one supported font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontInfo {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Registry of named fonts, kept in registration order for stable listings.
#[derive(Debug, Clone)]
pub struct FontTable {
    entries: Vec<(String, GlyphMap)>,
}

impl FontTable {
    /// Table with no fonts; every lookup degrades to the literal-text path.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Table pre-loaded with the builtin styles.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (name, font) in fonts::builtin() {
            table.register(name, font);
        }
        table
    }

    /// Register a font, replacing any existing entry with the same name.
    pub fn register(&mut self, name: impl Into<String>, font: GlyphMap) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = font;
        } else {
            self.entries.push((name, font));
        }
    }

    pub fn get(&self, name: &str) -> Option<&GlyphMap> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listing entries with human-friendly display names.
    pub fn infos(&self) -> Vec<FontInfo> {
        self.names()
            .map(|name| FontInfo {
                name: name.to_string(),
                display_name: display_name(name),
            })
            .collect()
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Derive a display name from a font identifier: first character
/// capitalized, internal `-`/`_` separators replaced with spaces.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().replace(['-', '_'], " "));
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_not_empty() {
        let table = FontTable::builtin();
        assert!(!table.is_empty());
        assert!(table.get("standard").is_some());
    }

    #[test]
    fn test_every_builtin_font_has_space_fallback() {
        let table = FontTable::builtin();
        for name in table.names() {
            let font = table.get(name).unwrap();
            assert!(font.contains_key(&' '), "font {name:?} lacks a space glyph");
        }
    }

    #[test]
    fn test_builtin_fonts_have_uniform_row_heights() {
        let table = FontTable::builtin();
        for name in table.names() {
            let font = table.get(name).unwrap();
            let height = font.get(&'A').map(|g| g.len()).unwrap();
            for (ch, glyph) in font {
                assert_eq!(glyph.len(), height, "glyph {ch:?} in font {name:?}");
            }
        }
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut table = FontTable::empty();
        let mut font = GlyphMap::new();
        font.insert(' ', vec![" ".to_string()]);
        table.register("custom", font.clone());
        font.insert('A', vec!["#".to_string()]);
        table.register("custom", font);
        assert_eq!(table.len(), 1);
        assert!(table.get("custom").unwrap().contains_key(&'A'));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("standard"), "Standard");
        assert_eq!(display_name("larry3d"), "Larry3d");
        assert_eq!(display_name("star-wars"), "Star wars");
        assert_eq!(display_name("old_school"), "Old school");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_infos_preserve_registration_order() {
        let table = FontTable::builtin();
        let names: Vec<&str> = table.names().collect();
        let infos = table.infos();
        let info_names: Vec<&str> = infos.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, info_names);
        assert_eq!(names[0], "standard");
    }
}
