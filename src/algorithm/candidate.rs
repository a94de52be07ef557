//! Scored layout candidates

use crate::algorithm::cost::CostBreakdown;
use crate::algorithm::factorization::GridShape;
use crate::algorithm::scale::ScaleFit;
use crate::spatial::{EdgeAdjustment, FitStrategy};
use serde::Serialize;

/// A complete, scored layout: grid, cell size, tile usage and edge adjustment
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridCandidate {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Integer multiplier applied to the reduced tile aspect
    pub scale: u32,
    /// Cell width in pixels
    pub cell_width: u64,
    /// Cell height in pixels
    pub cell_height: u64,
    /// Tiles placed in the grid (`cols × rows`)
    pub used_tiles: u32,
    /// Tiles left out of the build
    pub omitted_tiles: u32,
    /// Uncropped montage width
    pub montage_width: u64,
    /// Uncropped montage height
    pub montage_height: u64,
    /// Pad or clip per axis to reach the canvas
    pub adjustment: EdgeAdjustment,
    /// Cost of this candidate
    pub cost: CostBreakdown,
}

impl GridCandidate {
    /// Assemble a candidate from a grid, one of its scales and its cost
    pub const fn from_fit(
        shape: GridShape,
        fit: &ScaleFit,
        used_tiles: u32,
        omitted_tiles: u32,
        cost: CostBreakdown,
    ) -> Self {
        Self {
            cols: shape.cols,
            rows: shape.rows,
            scale: fit.scale,
            cell_width: fit.cell_width,
            cell_height: fit.cell_height,
            used_tiles,
            omitted_tiles,
            montage_width: fit.montage_width,
            montage_height: fit.montage_height,
            adjustment: fit.adjustment,
            cost,
        }
    }

    /// Grid shape of this candidate
    pub const fn shape(&self) -> GridShape {
        GridShape::new(self.cols, self.rows)
    }

    /// Tiles in the pool this candidate was scored against
    pub const fn available_tiles(&self) -> u32 {
        self.used_tiles + self.omitted_tiles
    }

    /// Share of the pool left out
    pub fn omit_fraction(&self) -> f64 {
        match self.available_tiles() {
            0 => 0.0,
            available => f64::from(self.omitted_tiles) / f64::from(available),
        }
    }

    /// How the montage reaches the canvas
    pub const fn strategy(&self) -> FitStrategy {
        self.adjustment.strategy()
    }

    /// `|cols − rows|`, smaller is closer to a square grid
    pub const fn aspect_skew(&self) -> u32 {
        self.cols.abs_diff(self.rows)
    }

    /// Final canvas dimensions after the adjustment
    pub const fn canvas_size(&self) -> (u64, u64) {
        self.adjustment.apply(self.montage_width, self.montage_height)
    }

    /// Share of an edge column cropped on each side
    pub fn horizontal_clip_fraction(&self) -> f64 {
        self.adjustment.horizontal.edge_clip_fraction(self.cell_width)
    }

    /// Share of an edge row cropped on each side
    pub fn vertical_clip_fraction(&self) -> f64 {
        self.adjustment.vertical.edge_clip_fraction(self.cell_height)
    }
}
