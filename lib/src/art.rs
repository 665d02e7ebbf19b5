//! Output shapes shared by both pipelines.
//!
//! A [`RenderedBlock`] is the multi-line text produced by the glyph
//! compositor and the image densifier. The densifier additionally carries a
//! per-cell color grid, which travels next to the text using the
//! `COLOR_DATA:` wire convention implemented here.

use serde::{Deserialize, Serialize};

/// Sentinel prefix marking the first line of an encoded color block.
///
/// A block whose first line does not start with this prefix is plain
/// grayscale text; consumers must check before parsing.
pub const COLOR_SENTINEL: &str = "COLOR_DATA:";

/// One character cell with its sampled source color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCell {
    #[serde(rename = "char")]
    pub ch: char,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorCell {
    pub fn new(ch: char, r: u8, g: u8, b: u8) -> Self {
        Self { ch, r, g, b }
    }

    /// Cell emitted for transparent pixels: a space with black color.
    pub fn transparent() -> Self {
        Self::new(' ', 0, 0, 0)
    }
}

/// Row-major grid of color cells, one per character position.
pub type ColorGrid = Vec<Vec<ColorCell>>;

/// An immutable multi-line block of ASCII art.
///
/// Created fresh on every generation; post-processing derives new blocks
/// instead of mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedBlock {
    lines: Vec<String>,
}

impl RenderedBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split plain text into a block, one entry per source line.
    pub fn from_text(text: &str) -> Self {
        Self { lines: text.split('\n').map(str::to_string).collect() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the block.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line, in characters.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    /// True when every line is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Lines joined with `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lines each terminated with `\n` (the densifier's flat form).
    pub fn to_newline_terminated(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Encode a color grid ahead of its grayscale text.
///
/// Wire format: one line of `COLOR_DATA:` immediately followed by the JSON
/// array-of-arrays of cells, then the grayscale text verbatim.
pub fn encode_color_block(grid: &ColorGrid, grayscale: &str) -> String {
    // ColorCell serialization is infallible: chars and u8 fields only.
    let json = serde_json::to_string(grid).expect("color grid serializes");
    format!("{COLOR_SENTINEL}{json}\n{grayscale}")
}

/// Decode an encoded color block back into its grid and grayscale text.
///
/// Returns `None` when the sentinel is absent or the embedded JSON does not
/// parse; callers treat the whole input as plain grayscale in that case.
pub fn decode_color_block(text: &str) -> Option<(ColorGrid, String)> {
    let rest = text.strip_prefix(COLOR_SENTINEL)?;
    let (json, grayscale) = match rest.split_once('\n') {
        Some((first, remainder)) => (first, remainder),
        None => (rest, ""),
    };
    match serde_json::from_str::<ColorGrid>(json) {
        Ok(grid) => Some((grid, grayscale.to_string())),
        Err(err) => {
            log::warn!("discarding unparseable color data: {err}");
            None
        }
    }
}
