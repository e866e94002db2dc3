//! Recompress all `*_albedo.png` textures in a directory
//!
//! Usage: texcrush-albedo <path>

use std::process::ExitCode;

use texcrush::TextureKind;

fn main() -> anyhow::Result<ExitCode> {
    texcrush::cli::run_fixed(TextureKind::Albedo)
}
