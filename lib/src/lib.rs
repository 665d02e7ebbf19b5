//! asciigen - text and image to ASCII art engine
//!
//! Two pipelines share one output shape: the glyph compositor renders text
//! through bitmap fonts, and the image densifier maps pixel brightness onto
//! a density ramp while preserving per-cell color.
//!
//! # Example
//! ```
//! use asciigen::{FontTable, compose_styled};
//!
//! let table = FontTable::builtin();
//! let banner = compose_styled("HI", "standard", &table).into_text();
//! assert!(banner.contains('#'));
//! ```

pub mod api;
pub mod art;
pub mod compose;
pub mod densify;
pub mod error;
pub mod font;
pub mod fonts;
pub mod render;
pub mod session;

// Re-export main types for convenience
pub use art::{
    COLOR_SENTINEL, ColorCell, ColorGrid, RenderedBlock, decode_color_block, encode_color_block,
};
pub use compose::{Composed, DEFAULT_CELL_HEIGHT, compose, compose_styled};
pub use densify::{DENSITY_RAMP, DensifiedArt, DensifyOptions, densify, densify_image, densify_path};
pub use error::ArtError;
pub use font::{FontInfo, FontTable, GlyphMap};
pub use render::{CanvasOptions, Prepared, paint, prepare};
pub use session::{AsciiArt, GenerationSettings, GenerationStatus, InputKind, Session};
