//! Error types
//!
//! `Error` covers everything that stops a batch before it starts. Per-file
//! failures are `CodecError`s; the batch loop records them and moves on.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Batch-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown texture kind '{0}' (expected albedo, normal or orm)")]
    UnknownKind(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("'{}' did not match any files", root.display())]
    NoMatch { root: PathBuf, pattern: String },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Errors caused by bad arguments, reported together with usage text
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::UnknownKind(_) | Error::Config(_))
    }
}

/// Failure recompressing a single texture
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("read failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PNG: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to optimize PNG: {0}")]
    Optimize(#[source] oxipng::PngError),

    #[error("write failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        assert!(Error::UnknownKind("x".into()).is_usage());
        assert!(Error::Config(ConfigError::RootNotFound(PathBuf::from("/nope"))).is_usage());
        assert!(!Error::NoMatch {
            root: PathBuf::from("/tex"),
            pattern: "*_orm.png".into()
        }
        .is_usage());
    }

    #[test]
    fn test_no_match_names_root() {
        let err = Error::NoMatch {
            root: PathBuf::from("assets/materials"),
            pattern: "*_normal.png".into(),
        };
        assert_eq!(err.to_string(), "'assets/materials' did not match any files");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = CodecError::Write {
            path: PathBuf::from("a_albedo.png"),
            source: std::io::Error::other("disk full"),
        };
        // The batch log line already names the file
        assert!(!err.to_string().contains("a_albedo.png"));
        assert!(err.to_string().contains("disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
