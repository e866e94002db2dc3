//! Path helpers for texture files

use std::path::{Path, PathBuf};

/// Output path for a recompressed texture: the final extension becomes `.png`
/// `rock_albedo.PNG` -> `rock_albedo.png`, `rock_albedo.tmp.png` is unchanged
pub fn png_output_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(_) => path.with_extension("png"),
        None => path.to_path_buf(),
    }
}

/// File name as a string, empty for paths without one
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check whether a file name ends with `<prefix><suffix>`
pub fn has_prefixed_suffix(path: &Path, prefix: &str, suffix: &str) -> bool {
    let name = file_name(path);
    name.strip_suffix(suffix)
        .is_some_and(|stem| stem.ends_with(prefix))
}
