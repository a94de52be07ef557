//! Integer cell scales for a fixed grid
//!
//! Cells are `(tw·k) × (th·k)` for integer `k`, so the tile aspect survives
//! exactly. For each grid the useful scales run from the largest one that
//! pads both axes up to the ones that start clipping.

use crate::algorithm::factorization::GridShape;
use crate::algorithm::optimizer::SearchLimits;
use crate::spatial::{CanvasSpec, EdgeAdjustment, TileAspect};
use std::ops::RangeInclusive;

/// One integer scale evaluated for a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFit {
    /// Integer multiplier applied to the reduced tile aspect
    pub scale: u32,
    /// Cell width in pixels
    pub cell_width: u64,
    /// Cell height in pixels
    pub cell_height: u64,
    /// Uncropped montage width
    pub montage_width: u64,
    /// Uncropped montage height
    pub montage_height: u64,
    /// Pad or clip needed on each axis
    pub adjustment: EdgeAdjustment,
}

/// Smallest scale whose cells keep both sides at least `min_cell_side` pixels
pub const fn minimum_scale(aspect: TileAspect, limits: &SearchLimits) -> u32 {
    let by_floor = limits.min_cell_side.div_ceil(aspect.shortest_term());
    if by_floor > 1 { by_floor } else { 1 }
}

/// Scales worth evaluating for a grid
///
/// Spans the exact fit of each axis widened by `scale_margin` on both
/// sides, never below [`minimum_scale`]. May be empty.
pub fn scale_range(
    shape: GridShape,
    canvas: &CanvasSpec,
    limits: &SearchLimits,
) -> RangeInclusive<u32> {
    let side = f64::from(canvas.side());
    let aspect = canvas.aspect();
    let exact_width = side / (f64::from(shape.cols) * f64::from(aspect.width()));
    let exact_height = side / (f64::from(shape.rows) * f64::from(aspect.height()));

    let low = (exact_width.min(exact_height).floor() as u32).saturating_sub(limits.scale_margin);
    let high = (exact_width.max(exact_height).floor() as u32).saturating_add(limits.scale_margin);

    low.max(minimum_scale(aspect, limits))..=high
}

/// Evaluate a single scale
///
/// Returns `None` when either axis clips more than `max_clip_fraction` of an
/// edge cell.
pub fn evaluate_scale(
    shape: GridShape,
    scale: u32,
    canvas: &CanvasSpec,
    limits: &SearchLimits,
) -> Option<ScaleFit> {
    let (cell_width, cell_height) = canvas.aspect().cell(scale);
    let montage_width = u64::from(shape.cols) * cell_width;
    let montage_height = u64::from(shape.rows) * cell_height;
    let adjustment = EdgeAdjustment::between(montage_width, montage_height, u64::from(canvas.side()));

    let too_much_clipping = adjustment.horizontal.edge_clip_fraction(cell_width)
        > limits.max_clip_fraction
        || adjustment.vertical.edge_clip_fraction(cell_height) > limits.max_clip_fraction;

    (!too_much_clipping).then_some(ScaleFit {
        scale,
        cell_width,
        cell_height,
        montage_width,
        montage_height,
        adjustment,
    })
}

/// Evaluate every useful scale for a grid
///
/// When some scale pads both axes, smaller scales only add padding and are
/// dropped, keeping the largest padding scale and everything above it.
pub fn explore_scales(shape: GridShape, canvas: &CanvasSpec, limits: &SearchLimits) -> Vec<ScaleFit> {
    let fits: Vec<ScaleFit> = scale_range(shape, canvas, limits)
        .filter_map(|scale| evaluate_scale(shape, scale, canvas, limits))
        .collect();

    let largest_padding_scale = fits
        .iter()
        .filter(|fit| !fit.adjustment.horizontal.is_clip() && !fit.adjustment.vertical.is_clip())
        .map(|fit| fit.scale)
        .max();

    match largest_padding_scale {
        Some(floor) => fits.into_iter().filter(|fit| fit.scale >= floor).collect(),
        None => fits,
    }
}
