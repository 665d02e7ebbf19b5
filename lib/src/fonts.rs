//! Builtin font data.
//!
//! All builtin styles are rendered from one shared 5×7 bitmap table, the
//! same masks the canvas painter uses for export. Each style picks its own
//! ink and geometry, so the row strings differ per font while the letter
//! shapes stay consistent.

use crate::font::GlyphMap;

/// Columns per base glyph bitmap.
pub const GLYPH_WIDTH: usize = 5;
/// Rows per base glyph bitmap.
pub const GLYPH_HEIGHT: usize = 7;

/// 5×7 bitmaps, one byte per row, low 5 bits used, MSB on the left.
const BASE_GLYPHS: &[(char, [u8; GLYPH_HEIGHT])] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b01000]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    (';', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('_', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('=', [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]),
    ('#', [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]),
    ('@', [0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01110]),
    ('*', [0b00100, 0b10101, 0b01110, 0b00100, 0b01110, 0b10101, 0b00100]),
    ('$', [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100]),
    ('%', [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011]),
    ('&', [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]),
    ('\'', [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('(', [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]),
    (')', [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]),
    ('/', [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
    ('\\', [0b10000, 0b01000, 0b01000, 0b00100, 0b00010, 0b00010, 0b00001]),
    ('|', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
];

/// Look up the base 5×7 bitmap for a character, if one is defined.
pub fn base_bitmap(ch: char) -> Option<&'static [u8; GLYPH_HEIGHT]> {
    BASE_GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, rows)| rows)
}

fn bit(row: u8, x: usize) -> bool {
    (row >> (GLYPH_WIDTH - 1 - x)) & 1 != 0
}

/// Render one bitmap into row strings with the given ink per set bit and
/// blank per clear bit. `ink` and `blank` must be equally wide.
fn render_rows(rows: &[u8], ink: &str, blank: &str) -> Vec<String> {
    rows.iter()
        .map(|&row| {
            let mut line = String::new();
            for x in 0..GLYPH_WIDTH {
                line.push_str(if bit(row, x) { ink } else { blank });
            }
            line
        })
        .collect()
}

/// Fold the 7 base rows into 4 by OR-ing row pairs.
fn compress_rows(rows: &[u8; GLYPH_HEIGHT]) -> Vec<u8> {
    vec![rows[0] | rows[1], rows[2] | rows[3], rows[4] | rows[5], rows[6]]
}

/// Render with a one-cell drop shadow below and to the right of the ink.
fn shadow_rows(rows: &[u8; GLYPH_HEIGHT]) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|y| {
            let mut line = String::new();
            for x in 0..=GLYPH_WIDTH {
                let inked = x < GLYPH_WIDTH && bit(rows[y], x);
                let shadowed = y > 0 && x > 0 && bit(rows[y - 1], x - 1);
                line.push(if inked {
                    '█'
                } else if shadowed {
                    '░'
                } else {
                    ' '
                });
            }
            line
        })
        .collect()
}

/// Render with an italic shear: upper rows shift right, padded so every
/// row keeps the same width.
fn slant_rows(rows: &[u8; GLYPH_HEIGHT]) -> Vec<String> {
    let max_offset = (GLYPH_HEIGHT - 1) / 2;
    (0..GLYPH_HEIGHT)
        .map(|y| {
            let offset = (GLYPH_HEIGHT - 1 - y) / 2;
            let mut line = " ".repeat(offset);
            for x in 0..GLYPH_WIDTH {
                line.push(if bit(rows[y], x) { '#' } else { ' ' });
            }
            line.push_str(&" ".repeat(max_offset - offset));
            line
        })
        .collect()
}

fn build_font(render: impl Fn(&[u8; GLYPH_HEIGHT]) -> Vec<String>) -> GlyphMap {
    BASE_GLYPHS.iter().map(|(ch, rows)| (*ch, render(rows))).collect()
}

/// All builtin fonts in listing order.
pub fn builtin() -> Vec<(&'static str, GlyphMap)> {
    vec![
        ("standard", build_font(|rows| render_rows(rows, "#", " "))),
        ("big", build_font(|rows| render_rows(rows, "██", "  "))),
        ("small", build_font(|rows| render_rows(&compress_rows(rows), "#", " "))),
        ("banner", build_font(|rows| render_rows(rows, "##", "  "))),
        ("block", build_font(|rows| render_rows(rows, "█", " "))),
        ("bubble", build_font(|rows| render_rows(rows, "o", " "))),
        ("shadow", build_font(shadow_rows)),
        ("slant", build_font(slant_rows)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_bitmap_lookup() {
        assert!(base_bitmap('A').is_some());
        assert!(base_bitmap(' ').is_some());
        assert!(base_bitmap('~').is_none());
    }

    #[test]
    fn test_base_glyphs_have_no_duplicates() {
        for (i, (ch, _)) in BASE_GLYPHS.iter().enumerate() {
            assert!(
                !BASE_GLYPHS[i + 1..].iter().any(|(other, _)| other == ch),
                "duplicate base glyph {ch:?}"
            );
        }
    }

    #[test]
    fn test_standard_glyph_shape() {
        let fonts = builtin();
        let (_, standard) = fonts.iter().find(|(name, _)| *name == "standard").unwrap();
        let a = standard.get(&'A').unwrap();
        assert_eq!(a.len(), GLYPH_HEIGHT);
        assert_eq!(a[0], " ### ");
        assert_eq!(a[3], "#####");
    }

    #[test]
    fn test_rows_are_equal_width_within_each_font() {
        for (name, font) in builtin() {
            let width = font.get(&'A').unwrap()[0].chars().count();
            for (ch, glyph) in &font {
                for row in glyph {
                    assert_eq!(
                        row.chars().count(),
                        width,
                        "row width mismatch for {ch:?} in {name:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_space_glyph_is_blank() {
        for (name, font) in builtin() {
            let space = font.get(&' ').unwrap();
            for row in space {
                assert!(row.trim().is_empty(), "space glyph not blank in {name:?}");
            }
        }
    }

    #[test]
    fn test_small_font_is_shorter() {
        let fonts = builtin();
        let (_, small) = fonts.iter().find(|(name, _)| *name == "small").unwrap();
        assert_eq!(small.get(&'A').unwrap().len(), 4);
    }

    #[test]
    fn test_bubble_font_uses_round_ink() {
        let fonts = builtin();
        let (_, bubble) = fonts.iter().find(|(name, _)| *name == "bubble").unwrap();
        let o = bubble.get(&'O').unwrap();
        assert!(o[0].contains('o'));
        assert!(!o.iter().any(|row| row.contains('#')));
    }

    #[test]
    fn test_slant_font_shears_upper_rows() {
        let fonts = builtin();
        let (_, slant) = fonts.iter().find(|(name, _)| *name == "slant").unwrap();
        let l = slant.get(&'L').unwrap();
        // L's vertical stroke sits at column 0 unsheared; the top row is
        // pushed right while the bottom row is not.
        assert!(l[0].starts_with("   #"));
        assert!(l[6].starts_with('#'));
        // Shear padding keeps all rows equally wide.
        assert!(l.iter().all(|row| row.chars().count() == l[0].chars().count()));
    }

    #[test]
    fn test_shadow_font_casts_shadow() {
        let fonts = builtin();
        let (_, shadow) = fonts.iter().find(|(name, _)| *name == "shadow").unwrap();
        let l = shadow.get(&'L').unwrap();
        // The vertical stroke of L leaves a shadow column next to it.
        assert!(l[1].contains('░'), "expected shadow in {l:?}");
    }
}
