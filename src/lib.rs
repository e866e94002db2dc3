//! texcrush - batch recompression of PNG texture maps
//!
//! Finds `*_albedo.png`, `*_normal.png` or `*_orm.png` files in a directory
//! and rewrites each one in place with a fixed per-kind PNG configuration.

pub mod batch;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod paths;
pub mod textures;

pub use batch::{run_batch, BatchReport, FileFailure};
pub use config::{BatchConfig, ConfigError};
pub use error::{CodecError, Error};
pub use textures::{PngOptions, TextureKind};
