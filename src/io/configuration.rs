//! Optimizer constants and runtime configuration

use crate::algorithm::cost::{CostWeights, OmitScaling};
use crate::algorithm::optimizer::{Optimizer, SearchLimits};
use crate::io::error::{LayoutError, Result, WithPath};
use crate::spatial::{CanvasSpec, TileAspect};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// Canvas defaults match the 4K master render
/// Default square canvas side in pixels
pub const DEFAULT_CANVAS_SIDE: u32 = 4096;
/// Largest accepted canvas side
pub const MAX_CANVAS_SIDE: u32 = 65_536;
/// Default tile aspect (300×400 portrait tiles)
pub const DEFAULT_TILE_ASPECT: (u32, u32) = (3, 4);
/// Largest accepted aspect term after reduction
pub const MAX_ASPECT_TERM: u32 = 10_000;

// Cost weights
/// Base cost for omitting tiles
pub const OMIT_BASE_COST: f64 = 1500.0;
/// Cost per pixel of padding
pub const PAD_COST: f64 = 1.0;
/// Cost per pixel of clipping
pub const CLIP_COST: f64 = 2.0;

// Search bounds
/// Largest share of an edge cell that may be clipped on each edge
pub const MAX_CLIP_FRACTION: f64 = 0.33;
/// Smallest `cols / rows` considered (1:2, very tall)
pub const MIN_GRID_RATIO: f64 = 0.5;
/// Largest `cols / rows` considered (2:1, very wide)
pub const MAX_GRID_RATIO: f64 = 2.0;
/// Grid shapes kept per tile count
pub const FACTORIZATIONS_PER_COUNT: usize = 5;
/// Scales explored beyond each axis' exact fit
pub const SCALE_MARGIN: u32 = 2;
/// Minimum cell side in pixels
pub const MIN_CELL_SIDE: u32 = 1;
/// Tile counts explored before a search gives up
pub const MAX_SEARCH_STEPS: u32 = 50_000;

// Output settings
/// Layouts shown by default when listing options
pub const DEFAULT_TOP_LAYOUTS: usize = 3;
/// File extension of tiles in a pool directory
pub const TILE_EXTENSION: &str = "png";
/// Manifest file name written next to a build
pub const MANIFEST_FILE_NAME: &str = "manifest.json";
/// Algorithm label recorded in manifests
pub const MANIFEST_ALGORITHM: &str = "montage-grid";
/// Width of the sweep progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// `[canvas]` table of the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSettings {
    /// Square canvas side in pixels
    pub side: u32,
    /// Tile `[width, height]`, reduced on load
    pub tile_aspect: [u32; 2],
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            side: DEFAULT_CANVAS_SIDE,
            tile_aspect: [DEFAULT_TILE_ASPECT.0, DEFAULT_TILE_ASPECT.1],
        }
    }
}

/// `[weights]` table of the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightSettings {
    /// Base cost for omitting tiles
    pub omit_base_cost: f64,
    /// Cost per pixel of padding
    pub pad_cost: f64,
    /// Cost per pixel of clipping
    pub clip_cost: f64,
    /// How omission cost scales with omitted tiles
    pub omit_scaling: OmitScaling,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            omit_base_cost: OMIT_BASE_COST,
            pad_cost: PAD_COST,
            clip_cost: CLIP_COST,
            omit_scaling: OmitScaling::PerTile,
        }
    }
}

/// Complete runtime configuration
///
/// Every table and field is optional; missing values fall back to the
/// constants above.
///
/// ```toml
/// [canvas]
/// side = 4096
/// tile_aspect = [3, 4]
///
/// [weights]
/// omit_base_cost = 1500.0
/// omit_scaling = "fraction_of_pool"
///
/// [search]
/// max_clip_fraction = 0.25
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Canvas geometry
    pub canvas: CanvasSettings,
    /// Cost weights
    pub weights: WeightSettings,
    /// Search limits
    pub search: SearchLimits,
}

impl Settings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Config`] if the text is not valid configuration
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Read settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read config")?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| LayoutError::Config {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Validated canvas specification
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] for a zero or oversized side
    /// or a degenerate aspect
    pub fn canvas_spec(&self) -> Result<CanvasSpec> {
        let [width, height] = self.canvas.tile_aspect;
        CanvasSpec::new(self.canvas.side, TileAspect::new(width, height)?)
    }

    /// Validated cost weights
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] for negative or non-finite weights
    pub fn cost_weights(&self) -> Result<CostWeights> {
        let weights = &self.weights;
        Ok(
            CostWeights::new(weights.omit_base_cost, weights.pad_cost, weights.clip_cost)?
                .with_omit_scaling(weights.omit_scaling),
        )
    }

    /// Optimizer built from every table
    ///
    /// # Errors
    ///
    /// Returns the first validation error of any table
    pub fn optimizer(&self) -> Result<Optimizer> {
        Optimizer::new(self.canvas_spec()?, self.cost_weights()?, self.search)
    }
}
