//! Canvas geometry and edge adjustments
//!
//! This module contains the fixed per-deployment geometry:
//! - Tile aspect ratios kept in lowest terms
//! - The square output canvas
//! - Per-axis padding and clipping needed to turn a montage into the canvas

/// Per-axis padding and clipping between a montage and the canvas
pub mod adjustment;
/// Tile aspect ratio and square canvas specification
pub mod canvas;

pub use adjustment::{AxisAdjustment, EdgeAdjustment, FitStrategy};
pub use canvas::{CanvasSpec, TileAspect};
