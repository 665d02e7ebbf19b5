//! Post-processing and canvas painting for rendered blocks.
//!
//! Everything here is pure: the frontend adapter decides where the painted
//! canvas or the transformed text goes. Font-size scaling and letter
//! spacing derive new blocks; the original block is never touched.

use image::{Rgba, RgbaImage};

use crate::art::{ColorGrid, decode_color_block};
use crate::fonts::{GLYPH_HEIGHT, GLYPH_WIDTH, base_bitmap};

/// A block ready for display: color data split out, spacing and scaling
/// applied to the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub lines: Vec<String>,
    /// Present only for image-sourced art carrying an encoded color grid.
    pub color: Option<ColorGrid>,
}

/// Decode the color convention and apply font-size / letter-spacing
/// transforms. The color grid is indexed by untransformed positions, so a
/// transformed lookup that lands outside it degrades to a colorless cell.
pub fn prepare(text: &str, font_size: f32, letter_spacing: f32) -> Prepared {
    let (color, body) = match decode_color_block(text) {
        Some((grid, grayscale)) => (Some(grid), grayscale),
        None => (None, text.to_string()),
    };

    let mut lines: Vec<String> = body.split('\n').map(str::to_string).collect();
    if letter_spacing != 1.0 {
        lines = lines.iter().map(|line| spread_letters(line, letter_spacing)).collect();
    }
    if font_size > 1.0 {
        lines = scale_lines(&lines, font_size);
    }

    Prepared { lines, color }
}

/// Insert `max(0, round((spacing - 1) * 3))` blank columns between
/// characters.
pub fn spread_letters(line: &str, spacing: f32) -> String {
    let extra = ((spacing - 1.0) * 3.0).round().max(0.0) as usize;
    let gap = " ".repeat(extra);
    let mut out = String::new();
    for (i, ch) in line.chars().enumerate() {
        if i > 0 {
            out.push_str(&gap);
        }
        out.push(ch);
    }
    out
}

/// Repeat each character `round(size)` times horizontally and each line
/// the same number of times vertically.
pub fn scale_lines(lines: &[String], size: f32) -> Vec<String> {
    let repeat = size.round().max(1.0) as usize;
    let mut scaled = Vec::with_capacity(lines.len() * repeat);
    for line in lines {
        let wide: String = line.chars().flat_map(|ch| std::iter::repeat_n(ch, repeat)).collect();
        for _ in 0..repeat {
            scaled.push(wide.clone());
        }
    }
    scaled
}

/// Canvas geometry and palette for painting.
#[derive(Debug, Clone)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
    /// Largest monospace cell size the auto-fit may pick, in pixels.
    pub max_text_px: f32,
    /// Smallest monospace cell size the auto-fit may pick, in pixels.
    pub min_text_px: f32,
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    /// Paint per-cell colors (or the hue fallback) instead of the
    /// foreground color.
    pub color: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            max_text_px: 24.0,
            min_text_px: 8.0,
            background: [255, 255, 255],
            foreground: [31, 41, 55],
            color: false,
        }
    }
}

/// Paint a prepared block onto a fixed-size canvas.
///
/// Text size auto-fits the content into the canvas (minus a margin),
/// clamped between `min_text_px` and `max_text_px`; the content is
/// centered. Empty lines are skipped, matching the export behavior of the
/// on-screen renderer.
pub fn paint(prepared: &Prepared, options: &CanvasOptions) -> RgbaImage {
    let bg = Rgba([options.background[0], options.background[1], options.background[2], 255]);
    let mut canvas = RgbaImage::from_pixel(options.width, options.height, bg);

    let lines: Vec<&String> = prepared.lines.iter().filter(|line| !line.is_empty()).collect();
    if lines.is_empty() {
        return canvas;
    }

    let max_len = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as f32;
    let avail_w = options.width as f32 - 80.0;
    let avail_h = options.height as f32 - 80.0;
    let text_size = (avail_w / (max_len * 0.6))
        .min(avail_h / (lines.len() as f32 * 1.2))
        .min(options.max_text_px)
        .max(options.min_text_px);
    let char_w = text_size * 0.6;
    let line_h = text_size * 1.2;

    let start_x = (options.width as f32 - max_len * char_w) / 2.0;
    let start_y = (options.height as f32 - lines.len() as f32 * line_h) / 2.0;

    for (i, line) in lines.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let rgb = if options.color {
                cell_color(prepared.color.as_ref(), i, j, ch)
            } else {
                options.foreground
            };
            let x = start_x + j as f32 * char_w;
            let y = start_y + i as f32 * line_h;
            draw_glyph(&mut canvas, ch, x, y, char_w, text_size, rgb);
        }
    }

    canvas
}

/// Per-cell color when the grid covers the position, else the renderer's
/// deterministic hue spread for text-sourced art.
fn cell_color(grid: Option<&ColorGrid>, row: usize, col: usize, ch: char) -> [u8; 3] {
    if let Some(cell) = grid.and_then(|g| g.get(row)).and_then(|r| r.get(col)) {
        return [cell.r, cell.g, cell.b];
    }
    let hue = ((row * 10 + col * 5 + ch as usize) % 360) as f32;
    hsl_to_rgb(hue, 0.7, 0.5)
}

/// Draw one character by scaling its 5×7 bitmap into a `cell_w` × `cell_h`
/// box. Characters without a base bitmap fill the box, the same fallback
/// the bitmap fonts use for unknown glyphs.
fn draw_glyph(
    canvas: &mut RgbaImage,
    ch: char,
    x: f32,
    y: f32,
    cell_w: f32,
    cell_h: f32,
    rgb: [u8; 3],
) {
    let bitmap = base_bitmap(ch.to_ascii_uppercase());
    let color = Rgba([rgb[0], rgb[1], rgb[2], 255]);
    let px_w = cell_w.ceil().max(1.0) as u32;
    let px_h = cell_h.ceil().max(1.0) as u32;

    for dy in 0..px_h {
        for dx in 0..px_w {
            let on = match bitmap {
                Some(rows) => {
                    let bx = (dx as f32 / px_w as f32 * GLYPH_WIDTH as f32) as usize;
                    let by = (dy as f32 / px_h as f32 * GLYPH_HEIGHT as f32) as usize;
                    let row = rows[by.min(GLYPH_HEIGHT - 1)];
                    (row >> (GLYPH_WIDTH - 1 - bx.min(GLYPH_WIDTH - 1))) & 1 != 0
                }
                None => true,
            };
            if !on {
                continue;
            }
            let px = x + dx as f32;
            let py = y + dy as f32;
            if px < 0.0 || py < 0.0 {
                continue;
            }
            let (px, py) = (px as u32, py as u32);
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// HSL to RGB with hue in degrees, saturation and lightness in [0, 1].
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
