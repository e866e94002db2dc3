//! PNG recompression: decode, optional palette reduction, re-encode, optimize
//!
//! Writes go through a temporary file next to the target and are renamed
//! into place, so a texture is either the old or the new version.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat};
use tempfile::NamedTempFile;
use tracing::debug;

use super::options::PngOptions;
use super::quantize::reduce_palette;
use crate::error::CodecError;
use crate::paths::png_output_path;

/// Result of recompressing one file
#[derive(Debug, Clone)]
pub struct FileStats {
    /// Where the result was written
    pub output_path: PathBuf,
    /// Size of the source file
    pub input_bytes: u64,
    /// Size of the written file
    pub output_bytes: u64,
}

impl FileStats {
    /// Bytes saved, negative when the file grew
    pub fn saved(&self) -> i64 {
        self.input_bytes as i64 - self.output_bytes as i64
    }
}

/// Decode a PNG
pub fn decode_png(data: &[u8]) -> Result<DynamicImage, CodecError> {
    image::load_from_memory_with_format(data, ImageFormat::Png).map_err(CodecError::Decode)
}

/// Recompress PNG bytes with the given options
pub fn recompress_png(data: &[u8], options: &PngOptions) -> Result<Vec<u8>, CodecError> {
    let decoded = decode_png(data)?;
    debug!("Decoded {}x{} {:?}", decoded.width(), decoded.height(), decoded.color());

    let image = if options.palette {
        DynamicImage::ImageRgba8(reduce_palette(
            &decoded,
            usize::from(options.colors),
            options.sample_factor(),
            options.dither,
        ))
    } else {
        decoded
    };

    // Plain encode first, oxipng redoes filtering and deflate
    let mut encoded = Vec::new();
    image
        .write_with_encoder(PngEncoder::new(Cursor::new(&mut encoded)))
        .map_err(CodecError::Encode)?;

    let optimized =
        oxipng::optimize_from_memory(&encoded, &options.to_oxipng()).map_err(CodecError::Optimize)?;

    debug!("Recompressed {} -> {} bytes", data.len(), optimized.len());

    Ok(optimized)
}

/// Recompress a texture file in place
///
/// The output path is the input with its extension normalized to `.png`.
pub fn recompress_file(path: &Path, options: &PngOptions) -> Result<FileStats, CodecError> {
    let input = std::fs::read(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let output = recompress_png(&input, options)?;
    let output_path = png_output_path(path);
    write_atomic(&output_path, &output)?;

    Ok(FileStats {
        output_path,
        input_bytes: input.len() as u64,
        output_bytes: output.len() as u64,
    })
}

/// Write via a sibling temp file and rename over the target
///
/// A symlinked texture is written through: the rename lands on the link's
/// target and the link itself stays in place.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CodecError> {
    let write_err = |source: std::io::Error| CodecError::Write {
        path: path.to_path_buf(),
        source,
    };

    let resolved;
    let path = match std::fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            resolved = std::fs::canonicalize(path).map_err(write_err)?;
            debug!("Writing through symlink {} -> {}", path.display(), resolved.display());
            resolved.as_path()
        }
        _ => path,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    // Temp files are created 0600, keep the texture's own mode
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(data).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
