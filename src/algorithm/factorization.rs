//! Exact grid factorizations of a tile count
//!
//! Only grids that use every counted tile are considered: `cols × rows`
//! must equal the count exactly, so a grid never has empty slots.

use crate::algorithm::optimizer::SearchLimits;
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::math::ratio::grid_ratio;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A `cols × rows` grid shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridShape {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
}

impl GridShape {
    /// Create a grid shape
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Number of slots, or `None` on overflow
    pub const fn slots(&self) -> Option<u32> {
        self.cols.checked_mul(self.rows)
    }

    /// `cols / rows`
    pub fn ratio(&self) -> f64 {
        grid_ratio(self.cols, self.rows)
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

impl FromStr for GridShape {
    type Err = LayoutError;

    /// Parse `COLSxROWS`
    fn from_str(s: &str) -> Result<Self> {
        let (cols, rows) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid_parameter("grid", &s, &"expected COLSxROWS"))?;
        let parse_count = |count: &str| {
            count
                .trim()
                .parse::<u32>()
                .map_err(|err| invalid_parameter("grid", &s, &err))
        };

        Ok(Self::new(parse_count(cols)?, parse_count(rows)?))
    }
}

/// Find grids with exactly `tiles` slots whose `cols / rows` is close to `target_ratio`
///
/// Both orientations of every divisor pair are considered. Shapes outside
/// `[min_grid_ratio, max_grid_ratio]` are dropped, the rest ordered by
/// distance from the target (fewer columns first on ties) and cut to
/// `factorizations_per_count`.
pub fn find_factorizations(tiles: u32, target_ratio: f64, limits: &SearchLimits) -> Vec<GridShape> {
    let mut shapes: Vec<(f64, GridShape)> = Vec::new();

    for divisor in 1..=tiles.isqrt() {
        if tiles % divisor != 0 {
            continue;
        }
        let quotient = tiles / divisor;

        let mut consider = |shape: GridShape| {
            let ratio = shape.ratio();
            if ratio >= limits.min_grid_ratio && ratio <= limits.max_grid_ratio {
                shapes.push(((ratio - target_ratio).abs(), shape));
            }
        };

        consider(GridShape::new(quotient, divisor));
        if quotient != divisor {
            consider(GridShape::new(divisor, quotient));
        }
    }

    shapes.sort_by(|(error_a, shape_a), (error_b, shape_b)| {
        error_a
            .total_cmp(error_b)
            .then_with(|| shape_a.cols.cmp(&shape_b.cols))
    });

    shapes
        .into_iter()
        .take(limits.factorizations_per_count)
        .map(|(_, shape)| shape)
        .collect()
}
