//! Glyph Compositor: render text through a bitmap font.
//!
//! Each source line becomes `cell_height` output rows built by
//! concatenating the glyph rows of its characters, with one blank column
//! between characters. Missing fonts and missing glyphs never fail; they
//! degrade to literal text or blank cells.

use crate::art::RenderedBlock;
use crate::font::{FontTable, GlyphMap};

/// Cell height used when a font defines no glyph to measure.
pub const DEFAULT_CELL_HEIGHT: usize = 6;

/// Cell width used when a font defines no glyph to measure.
pub const DEFAULT_CELL_WIDTH: usize = 6;

/// Outcome of a styled composition.
///
/// `Fallback` is the degrade-gracefully path for unresolved font names: the
/// caller gets the literal input back and can tell the two cases apart
/// without exception-style control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    /// The text was rendered through a resolved font.
    Rendered(RenderedBlock),
    /// No usable font was found; carries the input text unchanged.
    Fallback(String),
}

impl Composed {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Composed::Fallback(_))
    }

    /// The output text regardless of which path produced it.
    pub fn into_text(self) -> String {
        match self {
            Composed::Rendered(block) => block.to_text(),
            Composed::Fallback(text) => text,
        }
    }
}

/// Resolve `style` against the table and compose, falling back to the
/// literal input when the style is unknown or the font is empty.
pub fn compose_styled(text: &str, style: &str, table: &FontTable) -> Composed {
    match table.get(style) {
        Some(font) if !font.is_empty() => Composed::Rendered(compose(text, font)),
        _ => {
            log::debug!("font {style:?} unresolved, returning literal text");
            Composed::Fallback(text.to_string())
        }
    }
}

/// Compose `text` through `font`.
///
/// Source lines are processed independently and their glyph rows appended
/// in source order. A whitespace-only source line contributes exactly one
/// empty output line, not `cell_height` of them.
pub fn compose(text: &str, font: &GlyphMap) -> RenderedBlock {
    let height = cell_height(font);
    let width = cell_width(font);
    let blank_cell = " ".repeat(width);

    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut rows = vec![String::new(); height];
        for (i, ch) in chars.iter().enumerate() {
            let glyph = lookup_glyph(font, *ch);
            for (row_idx, row) in rows.iter_mut().enumerate() {
                match glyph.and_then(|g| g.get(row_idx)) {
                    Some(glyph_row) => row.push_str(glyph_row),
                    // Glyph shorter than the cell height: blank cells.
                    None => row.push_str(&blank_cell),
                }
                // One-cell separator between characters, never after the last.
                if i < chars.len() - 1 {
                    row.push(' ');
                }
            }
        }
        out.extend(rows);
    }

    RenderedBlock::new(out)
}

/// Fonts are single-case: uppercase first, then exact glyph, then the
/// space glyph. `None` means a blank contribution, never a failure.
fn lookup_glyph(font: &GlyphMap, ch: char) -> Option<&Vec<String>> {
    font.get(&ch.to_ascii_uppercase()).or_else(|| font.get(&' '))
}

/// Rows contributed per source line: measured from `'A'`, else from any
/// existing glyph, else the fixed default.
fn cell_height(font: &GlyphMap) -> usize {
    font.get(&'A')
        .or_else(|| font.values().next())
        .map(|glyph| glyph.len())
        .unwrap_or(DEFAULT_CELL_HEIGHT)
}

/// Blank-run width for rows a glyph does not cover.
fn cell_width(font: &GlyphMap) -> usize {
    font.get(&'A')
        .or_else(|| font.values().next())
        .and_then(|glyph| glyph.first())
        .map(|row| row.chars().count())
        .unwrap_or(DEFAULT_CELL_WIDTH)
}
