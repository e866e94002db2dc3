//! Recompress all `*_normal.png` textures in a directory
//!
//! Usage: texcrush-normal <path>

use std::process::ExitCode;

use texcrush::TextureKind;

fn main() -> anyhow::Result<ExitCode> {
    texcrush::cli::run_fixed(TextureKind::Normal)
}
