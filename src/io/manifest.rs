//! JSON build manifest describing the chosen layout and the tiles it uses

use crate::algorithm::candidate::GridCandidate;
use crate::io::configuration::MANIFEST_ALGORITHM;
use crate::io::error::{LayoutError, Result, WithPath};
use crate::io::pool::TileEntry;
use crate::spatial::{CanvasSpec, FitStrategy};
use serde::Serialize;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Geometry a compositor needs to render the montage and fit it to the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositorGeometry {
    /// Montage tile spec, `COLSxROWS`
    pub tile: String,
    /// Per-cell geometry with no spacing, `WxH+0+0`
    pub geometry: String,
    /// Horizontal montage origin on the canvas (negative when cropping)
    pub offset_x: i64,
    /// Vertical montage origin on the canvas (negative when cropping)
    pub offset_y: i64,
    /// Final canvas extent, `SIDExSIDE`
    pub extent: String,
}

impl CompositorGeometry {
    /// Geometry for a layout on a canvas
    pub fn for_layout(layout: &GridCandidate, canvas: &CanvasSpec) -> Self {
        Self {
            tile: format!("{}x{}", layout.cols, layout.rows),
            geometry: format!("{}x{}+0+0", layout.cell_width, layout.cell_height),
            offset_x: layout.adjustment.horizontal.origin_offset(),
            offset_y: layout.adjustment.vertical.origin_offset(),
            extent: format!("{0}x{0}", canvas.side()),
        }
    }
}

/// One selected tile, in placement order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoEntry {
    /// Tile file name
    pub filename: String,
}

/// Record of one collage build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildManifest {
    /// Unix seconds at creation
    pub created_at: u64,
    /// Layout algorithm label
    pub algorithm: &'static str,
    /// Canvas the layout targets
    pub canvas: CanvasSpec,
    /// Chosen layout
    pub layout: GridCandidate,
    /// How the montage reaches the canvas
    pub strategy: FitStrategy,
    /// Compositor parameters derived from the layout
    pub compositor: CompositorGeometry,
    /// Number of tiles placed
    pub photo_count: usize,
    /// Tiles in the pool when the build was planned
    pub total_available: u32,
    /// Selected tiles, oldest first
    pub photos: Vec<PhotoEntry>,
}

impl BuildManifest {
    /// Describe a build of `layout` using `tiles`
    pub fn new(
        canvas: CanvasSpec,
        layout: GridCandidate,
        tiles: &[TileEntry],
        total_available: u32,
    ) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());

        Self {
            created_at,
            algorithm: MANIFEST_ALGORITHM,
            canvas,
            strategy: layout.strategy(),
            compositor: CompositorGeometry::for_layout(&layout, &canvas),
            layout,
            photo_count: tiles.len(),
            total_available,
            photos: tiles
                .iter()
                .map(|tile| PhotoEntry {
                    filename: tile.name.clone(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Manifest`] if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| LayoutError::Manifest {
            path: "<memory>".into(),
            source,
        })
    }

    /// Write the manifest to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| LayoutError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        std::fs::write(path, json).with_path(path, "write manifest")
    }
}
