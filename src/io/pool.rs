//! Tile pool scanning with oldest-first selection

use crate::io::configuration::TILE_EXTENSION;
use crate::io::error::{Result, WithPath, invalid_parameter};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One tile file in a pool directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEntry {
    /// Full path to the tile
    pub path: PathBuf,
    /// File name, used as the ordering tie-break
    pub name: String,
    /// Last modification time
    pub modified: SystemTime,
}

/// Tiles of one directory, oldest first
#[derive(Debug, Clone)]
pub struct TilePool {
    dir: PathBuf,
    tiles: Vec<TileEntry>,
}

impl TilePool {
    /// Scan `dir` for tile files
    ///
    /// Only regular files with the tile extension are kept. Tiles are ordered
    /// by modification time, oldest first, then by file name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::FileSystem`] if the directory or a file's
    /// metadata cannot be read
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut tiles = Vec::new();

        for entry in std::fs::read_dir(dir).with_path(dir, "read tile directory")? {
            let path = entry.with_path(dir, "read tile directory")?.path();
            if path.extension().and_then(|s| s.to_str()) != Some(TILE_EXTENSION) {
                continue;
            }

            let metadata = std::fs::metadata(&path).with_path(&path, "read tile metadata")?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().with_path(&path, "read tile mtime")?;
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            tiles.push(TileEntry {
                path,
                name,
                modified,
            });
        }

        Ok(Self::from_entries(dir, tiles))
    }

    /// Build a pool from already collected entries
    pub fn from_entries(dir: &Path, mut tiles: Vec<TileEntry>) -> Self {
        tiles.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.name.cmp(&b.name)));
        Self {
            dir: dir.to_path_buf(),
            tiles,
        }
    }

    /// Directory the pool was scanned from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All tiles, oldest first
    pub fn tiles(&self) -> &[TileEntry] {
        &self.tiles
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool has no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile count as the optimizer's input type, saturating
    pub fn count(&self) -> u32 {
        u32::try_from(self.tiles.len()).unwrap_or(u32::MAX)
    }

    /// The `count` oldest tiles
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::InvalidParameter`] if the pool holds
    /// fewer than `count` tiles
    pub fn select(&self, count: u32) -> Result<&[TileEntry]> {
        self.tiles.get(..count as usize).ok_or_else(|| {
            invalid_parameter(
                "count",
                &count,
                &format!("only {} tiles in {}", self.tiles.len(), self.dir.display()),
            )
        })
    }
}
