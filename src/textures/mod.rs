//! Texture kinds and PNG recompression
//!
//! Each kind carries a fixed codec configuration. Recompression is lossless
//! except for palette kinds whose source has more colors than the palette.

mod kind;
mod options;
mod processor;
mod quantize;

pub use kind::TextureKind;
pub use options::{PngOptions, DEFAULT_EFFORT, MAX_PALETTE_COLORS};
pub use processor::{decode_png, recompress_file, recompress_png, FileStats};
pub use quantize::{count_colors, reduce_palette};
