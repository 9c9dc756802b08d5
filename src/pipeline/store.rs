//! Asset persistence.
//!
//! The pipeline hands every finished canvas to an `AssetStore`; the
//! filesystem implementation writes lossless RGBA PNGs, creating parent
//! directories on demand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::{PxgenError, Result};
use crate::render::png::write_png;

/// Destination for finished assets, keyed by relative path.
pub trait AssetStore {
    fn write(&self, relative_path: &Path, canvas: &Canvas) -> Result<()>;
}

/// Filesystem-backed store writing PNG files under an output root.
pub struct FsStore {
    root: PathBuf,
    scale: u32,
}

impl FsStore {
    /// Create a store rooted at `root` with an integer output scale.
    pub fn new(root: impl Into<PathBuf>, scale: u32) -> Self {
        Self {
            root: root.into(),
            scale,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for FsStore {
    fn write(&self, relative_path: &Path, canvas: &Canvas) -> Result<()> {
        let path = self.root.join(relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PxgenError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }

        write_png(canvas, &path, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_store_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path(), 1);

        let canvas = Canvas::new(2, 2).unwrap();
        store
            .write(Path::new("sprites/characters/head.png"), &canvas)
            .unwrap();

        assert!(dir.path().join("sprites/characters/head.png").exists());
    }

    #[test]
    fn test_fs_store_applies_scale() {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path(), 3);

        let canvas = Canvas::new(2, 2).unwrap();
        store.write(Path::new("tile.png"), &canvas).unwrap();

        let img = image::open(dir.path().join("tile.png")).unwrap();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 6);
    }
}
