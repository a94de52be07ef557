//! Omit/pad/clip cost model
//!
//! A candidate pays for every tile it leaves out of the pool, every pixel of
//! transparent padding and every pixel cropped away. Clipping is weighted
//! higher than padding by default because it removes parts of photos.

use crate::io::configuration::{CLIP_COST, OMIT_BASE_COST, PAD_COST};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::EdgeAdjustment;
use serde::{Deserialize, Serialize};

/// How the omission weight scales with the number of omitted tiles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmitScaling {
    /// `omit_base_cost × omitted`
    #[default]
    PerTile,
    /// `omit_base_cost × omitted / available`
    FractionOfPool,
}

/// Weights of the cost function
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostWeights {
    omit_base_cost: f64,
    pad_cost: f64,
    clip_cost: f64,
    omit_scaling: OmitScaling,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            omit_base_cost: OMIT_BASE_COST,
            pad_cost: PAD_COST,
            clip_cost: CLIP_COST,
            omit_scaling: OmitScaling::PerTile,
        }
    }
}

fn check_weight(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be finite and non-negative",
        ))
    }
}

impl CostWeights {
    /// Create weights with per-tile omission scaling
    ///
    /// # Errors
    ///
    /// Returns [`crate::LayoutError::InvalidParameter`] if any weight is
    /// negative, infinite or NaN
    pub fn new(omit_base_cost: f64, pad_cost: f64, clip_cost: f64) -> Result<Self> {
        Ok(Self {
            omit_base_cost: check_weight("omit_base_cost", omit_base_cost)?,
            pad_cost: check_weight("pad_cost", pad_cost)?,
            clip_cost: check_weight("clip_cost", clip_cost)?,
            omit_scaling: OmitScaling::PerTile,
        })
    }

    /// Replace the omission scaling
    #[must_use]
    pub const fn with_omit_scaling(mut self, omit_scaling: OmitScaling) -> Self {
        self.omit_scaling = omit_scaling;
        self
    }

    /// Weight applied to omitted tiles
    pub const fn omit_base_cost(&self) -> f64 {
        self.omit_base_cost
    }

    /// Weight per padding pixel
    pub const fn pad_cost(&self) -> f64 {
        self.pad_cost
    }

    /// Weight per clipped pixel
    pub const fn clip_cost(&self) -> f64 {
        self.clip_cost
    }

    /// How omission cost scales
    pub const fn omit_scaling(&self) -> OmitScaling {
        self.omit_scaling
    }

    /// Cost of leaving `omitted` of `available` tiles out
    ///
    /// Non-decreasing in `omitted` for a fixed pool, which is what lets the
    /// search stop early.
    pub fn omit_cost(&self, omitted: u32, available: u32) -> f64 {
        match self.omit_scaling {
            OmitScaling::PerTile => self.omit_base_cost * f64::from(omitted),
            OmitScaling::FractionOfPool if available > 0 => {
                self.omit_base_cost * f64::from(omitted) / f64::from(available)
            }
            OmitScaling::FractionOfPool => 0.0,
        }
    }

    /// Cost of the given padding and clipping pixel totals
    pub fn fit_cost(&self, padding: u64, clipping: u64) -> f64 {
        (padding as f64).mul_add(self.pad_cost, clipping as f64 * self.clip_cost)
    }

    /// Full breakdown for one candidate
    pub fn score(
        &self,
        omitted: u32,
        available: u32,
        adjustment: &EdgeAdjustment,
    ) -> CostBreakdown {
        let omit = self.omit_cost(omitted, available);
        let fit = self.fit_cost(adjustment.total_padding(), adjustment.total_clipping());
        CostBreakdown {
            omit,
            fit,
            total: omit + fit,
        }
    }
}

/// Cost of a candidate split into its parts
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Cost of omitted tiles
    pub omit: f64,
    /// Cost of padding and clipping
    pub fit: f64,
    /// Sum of both
    pub total: f64,
}
