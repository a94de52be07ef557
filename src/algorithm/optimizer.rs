use crate::algorithm::candidate::GridCandidate;
use crate::algorithm::cost::CostWeights;
use crate::algorithm::factorization::{GridShape, find_factorizations};
use crate::algorithm::ranking::{best_candidate, rank_candidates};
use crate::algorithm::scale::{ScaleFit, explore_scales, minimum_scale};
use crate::io::configuration::{
    FACTORIZATIONS_PER_COUNT, MAX_CLIP_FRACTION, MAX_GRID_RATIO, MAX_SEARCH_STEPS, MIN_CELL_SIDE,
    MIN_GRID_RATIO, SCALE_MARGIN,
};
use crate::io::error::{InfeasibleReason, LayoutError, Result, invalid_parameter};
use crate::spatial::CanvasSpec;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Bounds on the search space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    /// Largest share of an edge cell that may be cropped on each edge
    pub max_clip_fraction: f64,
    /// Smallest allowed `cols / rows`
    pub min_grid_ratio: f64,
    /// Largest allowed `cols / rows`
    pub max_grid_ratio: f64,
    /// Grid shapes kept per tile count, closest to square first
    pub factorizations_per_count: usize,
    /// Extra scales explored beyond each axis' exact fit
    pub scale_margin: u32,
    /// Minimum cell side in pixels
    pub min_cell_side: u32,
    /// Maximum number of tile counts explored in one search
    pub max_search_steps: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_clip_fraction: MAX_CLIP_FRACTION,
            min_grid_ratio: MIN_GRID_RATIO,
            max_grid_ratio: MAX_GRID_RATIO,
            factorizations_per_count: FACTORIZATIONS_PER_COUNT,
            scale_margin: SCALE_MARGIN,
            min_cell_side: MIN_CELL_SIDE,
            max_search_steps: MAX_SEARCH_STEPS,
        }
    }
}

impl SearchLimits {
    /// Check that the limits describe a non-empty search
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] naming the first bad field
    pub fn validate(&self) -> Result<()> {
        if !self.max_clip_fraction.is_finite() || self.max_clip_fraction < 0.0 {
            return Err(invalid_parameter(
                "max_clip_fraction",
                &self.max_clip_fraction,
                &"must be finite and non-negative",
            ));
        }
        if !(self.min_grid_ratio.is_finite() && self.min_grid_ratio > 0.0) {
            return Err(invalid_parameter(
                "min_grid_ratio",
                &self.min_grid_ratio,
                &"must be finite and positive",
            ));
        }
        if !self.max_grid_ratio.is_finite() || self.max_grid_ratio < self.min_grid_ratio {
            return Err(invalid_parameter(
                "max_grid_ratio",
                &self.max_grid_ratio,
                &"must be finite and at least min_grid_ratio",
            ));
        }
        if self.factorizations_per_count == 0 {
            return Err(invalid_parameter(
                "factorizations_per_count",
                &self.factorizations_per_count,
                &"must be at least 1",
            ));
        }
        if self.max_search_steps == 0 {
            return Err(invalid_parameter(
                "max_search_steps",
                &self.max_search_steps,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Grid layout optimizer for one canvas
///
/// Holds no mutable state; a single instance can serve any number of
/// requests, concurrently if shared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Optimizer {
    canvas: CanvasSpec,
    weights: CostWeights,
    limits: SearchLimits,
}

impl Optimizer {
    /// Create an optimizer
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] if the search limits are invalid
    pub fn new(canvas: CanvasSpec, weights: CostWeights, limits: SearchLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            canvas,
            weights,
            limits,
        })
    }

    /// Create an optimizer with the default search limits
    pub fn with_weights(canvas: CanvasSpec, weights: CostWeights) -> Self {
        Self {
            canvas,
            weights,
            limits: SearchLimits::default(),
        }
    }

    /// Canvas this optimizer targets
    pub const fn canvas(&self) -> &CanvasSpec {
        &self.canvas
    }

    /// Cost weights in use
    pub const fn weights(&self) -> &CostWeights {
        &self.weights
    }

    /// Search limits in use
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Choose the best layout for `available_tiles`
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InfeasibleLayout`] when there are no tiles, no
    /// grid fits within the limits, or the search budget runs out first
    pub fn optimize(&self, available_tiles: u32) -> Result<GridCandidate> {
        let candidates = self.search(available_tiles)?;
        let best = best_candidate(candidates)
            .ok_or_else(|| self.infeasible(available_tiles, InfeasibleReason::NoFeasibleGrid))?;

        info!(
            "{available_tiles} tiles -> {}x{} grid, {}x{} cells, {} used, cost {:.1}",
            best.cols, best.rows, best.cell_width, best.cell_height, best.used_tiles, best.cost.total
        );
        Ok(best)
    }

    /// Every candidate the search scored, best first
    ///
    /// # Errors
    ///
    /// Same conditions as [`Optimizer::optimize`]
    pub fn rank(&self, available_tiles: u32) -> Result<Vec<GridCandidate>> {
        let mut candidates = self.search(available_tiles)?;
        rank_candidates(&mut candidates);
        Ok(candidates)
    }

    /// Score a caller-chosen grid at its best cell scale
    ///
    /// Grid ratio bounds do not apply; the clipping limit and minimum cell
    /// side still do.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InfeasibleLayout`] when the pool is empty, the
    /// grid is empty or larger than the pool, or no scale fits
    pub fn evaluate_grid(&self, shape: GridShape, available_tiles: u32) -> Result<GridCandidate> {
        if available_tiles == 0 {
            return Err(self.infeasible(available_tiles, InfeasibleReason::NoTiles));
        }
        if shape.cols == 0 || shape.rows == 0 {
            return Err(self.infeasible(available_tiles, InfeasibleReason::EmptyGrid));
        }
        let used = shape
            .slots()
            .filter(|&slots| slots <= available_tiles)
            .ok_or_else(|| self.infeasible(available_tiles, InfeasibleReason::GridExceedsPool))?;

        let candidates = explore_scales(shape, &self.canvas, &self.limits)
            .iter()
            .map(|fit| self.candidate(shape, fit, used, available_tiles))
            .collect::<Vec<_>>();

        best_candidate(candidates)
            .ok_or_else(|| self.infeasible(available_tiles, InfeasibleReason::NoFeasibleGrid))
    }

    /// Upper bound on tiles any grid can hold without breaking the clip limit
    ///
    /// At the smallest allowed scale each axis fits at most
    /// `(side + 2·max_clip·cell) / cell` cells.
    pub fn capacity(&self) -> u64 {
        let scale = f64::from(minimum_scale(self.canvas.aspect(), &self.limits));
        let side = f64::from(self.canvas.side());
        let axis_limit = |term: u32| {
            let cell = f64::from(term) * scale;
            (2.0 * self.limits.max_clip_fraction).mul_add(cell, side) / cell
        };

        let cols = axis_limit(self.canvas.aspect().width()).floor() as u64;
        let rows = axis_limit(self.canvas.aspect().height()).floor() as u64;
        cols.saturating_mul(rows)
    }

    fn search(&self, available_tiles: u32) -> Result<Vec<GridCandidate>> {
        if available_tiles == 0 {
            return Err(self.infeasible(available_tiles, InfeasibleReason::NoTiles));
        }

        let ceiling = self.capacity().min(u64::from(available_tiles)) as u32;
        let target_ratio = self.canvas.aspect().square_grid_ratio();

        let mut candidates = Vec::new();
        let mut best_total = f64::INFINITY;
        let mut steps = 0_u32;
        let mut exhausted = false;

        for used in (1..=ceiling).rev() {
            if steps == self.limits.max_search_steps {
                exhausted = true;
                break;
            }
            steps += 1;

            // Omission cost only grows from here on
            let omit_cost = self.weights.omit_cost(available_tiles - used, available_tiles);
            if omit_cost > best_total {
                break;
            }

            for shape in find_factorizations(used, target_ratio, &self.limits) {
                for fit in explore_scales(shape, &self.canvas, &self.limits) {
                    let candidate = self.candidate(shape, &fit, used, available_tiles);
                    best_total = best_total.min(candidate.cost.total);
                    candidates.push(candidate);
                }
            }
        }

        debug!(
            "searched {steps} tile counts below {ceiling} for {available_tiles} tiles: {} candidates{}",
            candidates.len(),
            if exhausted { " (budget exhausted)" } else { "" }
        );

        if candidates.is_empty() {
            let reason = if exhausted {
                InfeasibleReason::SearchBudgetExhausted
            } else {
                InfeasibleReason::NoFeasibleGrid
            };
            return Err(self.infeasible(available_tiles, reason));
        }

        Ok(candidates)
    }

    fn candidate(
        &self,
        shape: GridShape,
        fit: &ScaleFit,
        used: u32,
        available_tiles: u32,
    ) -> GridCandidate {
        let omitted = available_tiles - used;
        let cost = self.weights.score(omitted, available_tiles, &fit.adjustment);
        GridCandidate::from_fit(shape, fit, used, omitted, cost)
    }

    const fn infeasible(&self, available_tiles: u32, reason: InfeasibleReason) -> LayoutError {
        LayoutError::InfeasibleLayout {
            available_tiles,
            canvas_side: self.canvas.side(),
            reason,
        }
    }
}

/// Choose the best layout for `available_tiles` on `canvas` with default search limits
///
/// # Errors
///
/// Returns [`LayoutError::InfeasibleLayout`] when no candidate exists
pub fn optimize(
    available_tiles: u32,
    canvas: CanvasSpec,
    weights: CostWeights,
) -> Result<GridCandidate> {
    Optimizer::with_weights(canvas, weights).optimize(available_tiles)
}
