//! Image Densifier: map a raster image onto a character grid.
//!
//! The source is resampled to a grid sized by the fidelity factor, then
//! each cell's brightness picks a character from the density ramp while the
//! sampled RGB is kept for the color version of the output.

use std::path::Path;
use std::time::Duration;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use rayon::prelude::*;

use crate::art::{ColorCell, ColorGrid, RenderedBlock, encode_color_block};
use crate::error::ArtError;

/// Density ramp ordered densest to lightest; darker pixels map to earlier
/// (denser) characters.
pub const DENSITY_RAMP: &[char] = &[
    'Ñ', '@', '#', 'W', '$', '9', '8', '7', '6', '5', '4', '3', '2', '1', '0', '?', '!', 'a', 'b',
    'c', ';', ':', '+', '=', '-', ',', '.', '_', ' ',
];

/// Character-grid width at fidelity 1.0.
pub const BASE_GRID_WIDTH: u32 = 100;

/// Alpha values below this render as fully transparent cells.
pub const ALPHA_THRESHOLD: u8 = 128;

const DEFAULT_DECODE_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for an image generation.
#[derive(Debug, Clone)]
pub struct DensifyOptions {
    /// Output resolution factor in (0, 1].
    pub fidelity: f32,
    /// Upper bound on the source decode wait.
    pub decode_timeout: Duration,
}

impl Default for DensifyOptions {
    fn default() -> Self {
        Self { fidelity: 0.7, decode_timeout: DEFAULT_DECODE_TIMEOUT }
    }
}

/// Both output shapes of one densify run.
#[derive(Debug, Clone)]
pub struct DensifiedArt {
    /// The chosen characters, row by row.
    pub grayscale: RenderedBlock,
    /// Encoded color block: sentinel line plus the grayscale text.
    pub color: String,
    /// The color grid itself, for consumers that skip the wire format.
    pub cells: ColorGrid,
}

impl DensifiedArt {
    /// Grayscale text with each row newline-terminated.
    pub fn grayscale_text(&self) -> String {
        self.grayscale.to_newline_terminated()
    }
}

/// Character grid resolution for a source of the given pixel dimensions.
///
/// Width is `floor(100 * fidelity)`; height scales by the source aspect
/// ratio and a 0.5 factor because a character cell is roughly twice as
/// tall as it is wide. Both are clamped to at least one cell.
pub fn grid_dimensions(src_width: u32, src_height: u32, fidelity: f32) -> (u32, u32) {
    let width = ((BASE_GRID_WIDTH as f32 * fidelity).floor() as u32).max(1);
    let aspect = src_height as f32 / src_width as f32;
    let height = ((aspect * width as f32 * 0.5).floor() as u32).max(1);
    (width, height)
}

/// Ramp character for a brightness in [0, 255].
pub fn ramp_char(brightness: f32) -> char {
    let max_index = (DENSITY_RAMP.len() - 1) as f32;
    let index = (brightness / 255.0 * max_index).floor() as usize;
    DENSITY_RAMP[index.min(DENSITY_RAMP.len() - 1)]
}

/// Synchronous densify core.
///
/// Validates fidelity, resamples the source to the target grid, then maps
/// every cell. Rows are mapped in parallel.
pub fn densify_image(image: &DynamicImage, fidelity: f32) -> Result<DensifiedArt, ArtError> {
    if !(fidelity > 0.0 && fidelity <= 1.0) {
        return Err(ArtError::InvalidInput(format!(
            "fidelity must be in (0, 1], got {fidelity}"
        )));
    }
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(ArtError::InvalidInput("image has zero dimensions".to_string()));
    }

    let (width, height) = grid_dimensions(src_width, src_height, fidelity);
    log::debug!("densifying {src_width}x{src_height} source to {width}x{height} cells");
    let sampled = image.resize_exact(width, height, FilterType::Lanczos3).to_rgba8();

    let rows: Vec<(String, Vec<ColorCell>)> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut text = String::with_capacity(width as usize);
            let mut cells = Vec::with_capacity(width as usize);
            for x in 0..width {
                let [r, g, b, a] = sampled.get_pixel(x, y).0;
                if a < ALPHA_THRESHOLD {
                    // Transparent cell: space, black, ramp not consulted.
                    text.push(' ');
                    cells.push(ColorCell::transparent());
                } else {
                    let brightness = (r as f32 + g as f32 + b as f32) / 3.0;
                    let ch = ramp_char(brightness);
                    text.push(ch);
                    cells.push(ColorCell::new(ch, r, g, b));
                }
            }
            (text, cells)
        })
        .collect();

    let (lines, cells): (Vec<String>, ColorGrid) = rows.into_iter().unzip();
    let grayscale = RenderedBlock::new(lines);
    let color = encode_color_block(&cells, &grayscale.to_newline_terminated());
    Ok(DensifiedArt { grayscale, color, cells })
}

/// Densify on a blocking worker so the caller's executor stays free.
pub async fn densify(image: DynamicImage, fidelity: f32) -> Result<DensifiedArt, ArtError> {
    tokio::task::spawn_blocking(move || densify_image(&image, fidelity)).await?
}

/// Decode an image file and densify it.
///
/// The decode runs on a blocking worker under `options.decode_timeout`; an
/// image that never finishes decoding surfaces [`ArtError::DecodeTimeout`]
/// instead of hanging the generation.
pub async fn densify_path(
    path: impl AsRef<Path>,
    options: &DensifyOptions,
) -> Result<DensifiedArt, ArtError> {
    let path = path.as_ref().to_path_buf();
    let decode = tokio::task::spawn_blocking(move || image::open(path));
    let image = match tokio::time::timeout(options.decode_timeout, decode).await {
        Ok(joined) => joined??,
        Err(_) => return Err(ArtError::DecodeTimeout { waited: options.decode_timeout }),
    };
    densify(image, options.fidelity).await
}
