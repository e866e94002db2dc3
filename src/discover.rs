//! Texture discovery by filename suffix
//!
//! Finds `*_<kind>.png` directly inside a directory, then narrows the set to
//! the requested name prefixes.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::Error;
use crate::paths;
use crate::textures::TextureKind;

/// Glob options: case-sensitive, `*` stays inside one path component and
/// hidden files are not matched
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Full glob pattern for a kind under `root`, with `root` escaped
pub fn pattern_for(root: &Path, kind: TextureKind) -> String {
    let escaped = Pattern::escape(&root.to_string_lossy());
    Path::new(&escaped)
        .join(kind.glob_pattern())
        .to_string_lossy()
        .into_owned()
}

/// Find all textures of `kind` directly inside `root`
///
/// Returns [`Error::NoMatch`] when nothing matches.
pub fn discover_files(root: &Path, kind: TextureKind) -> Result<Vec<PathBuf>, Error> {
    let pattern = pattern_for(root, kind);
    debug!("Globbing {}", pattern);

    let entries = glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|source| Error::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!("Skipping non-file match: {}", path.display()),
            Err(e) => warn!("Cannot read {}: {}", e.path().display(), e.error()),
        }
    }

    if files.is_empty() {
        return Err(Error::NoMatch {
            root: root.to_path_buf(),
            pattern: kind.glob_pattern(),
        });
    }

    Ok(files)
}

/// Keep files named `<prefix><suffix>` for any of `prefixes`
///
/// An empty prefix list keeps everything. Order is preserved.
pub fn filter_by_prefixes(files: Vec<PathBuf>, prefixes: &[String], suffix: &str) -> Vec<PathBuf> {
    if prefixes.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|path| {
            prefixes
                .iter()
                .any(|prefix| paths::has_prefixed_suffix(path, prefix, suffix))
        })
        .collect()
}
