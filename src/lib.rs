//! Grid layout optimizer for square photo collages
//!
//! Maps a pool of fixed-aspect photo tiles onto a `cols × rows` grid whose
//! montage, after centred padding or cropping, fills a square canvas exactly.
//! Candidate grids are scored by a weighted omit/pad/clip cost and the
//! cheapest one wins.

#![forbid(unsafe_code)]

/// Grid search, cell scaling, cost model and candidate ranking
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Integer ratio helpers
pub mod math;
/// Canvas geometry and per-edge pad/clip adjustments
pub mod spatial;

pub use algorithm::candidate::GridCandidate;
pub use algorithm::cost::{CostBreakdown, CostWeights, OmitScaling};
pub use algorithm::optimizer::{Optimizer, SearchLimits, optimize};
pub use io::error::{InfeasibleReason, LayoutError, Result};
pub use spatial::{AxisAdjustment, CanvasSpec, EdgeAdjustment, FitStrategy, TileAspect};
