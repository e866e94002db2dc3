//! Batch configuration
//!
//! Defines what a single invocation works on. Built by the CLI adapter,
//! consumed by [`crate::batch::run_batch`].

use std::path::PathBuf;

use crate::textures::TextureKind;

/// Configuration for one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Which texture maps to recompress
    pub kind: TextureKind,

    /// Directory holding the textures (not searched recursively)
    pub root: PathBuf,

    /// Only process `<prefix>_<kind>.png` files when non-empty
    pub prefixes: Vec<String>,

    /// List matching files without touching them
    pub dry_run: bool,
}

impl BatchConfig {
    pub fn new(kind: TextureKind, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            root: root.into(),
            prefixes: Vec::new(),
            dry_run: false,
        }
    }

    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }

        if !self.root.is_dir() {
            return Err(ConfigError::RootNotDirectory(self.root.clone()));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Texture directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
}
