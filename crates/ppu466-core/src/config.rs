// crates/ppu466-core/src/config.rs

use std::path::{Path, PathBuf};

use crate::layout::{ASSET_DIR, ASSET_EXTENSION};

/// Asset names loaded at startup, in table order. Tile and palette indices
/// used by sprite definitions depend on this order.
pub const DEFAULT_ASSET_NAMES: [&str; 3] = ["background", "player", "bug"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory holding `assets/`.
    pub content_root: PathBuf,
    pub asset_names: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            asset_names: DEFAULT_ASSET_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LoaderConfig {
    pub fn new(content_root: impl Into<PathBuf>, asset_names: Vec<String>) -> Self {
        Self {
            content_root: content_root.into(),
            asset_names,
        }
    }

    pub fn with_root(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            ..Self::default()
        }
    }

    /// `<content_root>/assets/<name><ASSET_EXTENSION>`
    pub fn asset_path(&self, name: &str) -> PathBuf {
        asset_path(&self.content_root, name)
    }
}

pub fn asset_path(content_root: &Path, name: &str) -> PathBuf {
    content_root
        .join(ASSET_DIR)
        .join(format!("{name}{ASSET_EXTENSION}"))
}
