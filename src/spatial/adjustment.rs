//! Per-axis padding and clipping between a montage and the square canvas
//!
//! A montage narrower than the canvas is padded with transparent pixels, a
//! wider one is cropped from the centre. Either way the total is split across
//! both edges: the leading edge (left/top) takes the floor of half, the
//! trailing edge (right/bottom) takes the remainder, so applying the
//! adjustment always lands exactly on the canvas side.

use serde::Serialize;
use std::fmt;

/// Adjustment along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "pixels", rename_all = "snake_case")]
pub enum AxisAdjustment {
    /// Montage already matches the canvas side
    Exact,
    /// Total transparent padding added across both edges
    Pad(u64),
    /// Total pixels cropped across both edges
    Clip(u64),
}

impl AxisAdjustment {
    /// Adjustment that turns a montage dimension into the canvas side
    pub const fn between(montage: u64, side: u64) -> Self {
        match side.checked_sub(montage) {
            Some(0) => Self::Exact,
            Some(padding) => Self::Pad(padding),
            None => Self::Clip(montage - side),
        }
    }

    /// Total padding pixels (zero unless padding)
    pub const fn padding(&self) -> u64 {
        match self {
            Self::Pad(pixels) => *pixels,
            Self::Exact | Self::Clip(_) => 0,
        }
    }

    /// Total clipping pixels (zero unless clipping)
    pub const fn clipping(&self) -> u64 {
        match self {
            Self::Clip(pixels) => *pixels,
            Self::Exact | Self::Pad(_) => 0,
        }
    }

    /// Total pixels adjusted on this axis
    pub const fn total(&self) -> u64 {
        match self {
            Self::Pad(pixels) | Self::Clip(pixels) => *pixels,
            Self::Exact => 0,
        }
    }

    /// Pixels applied at the left/top edge
    pub const fn leading(&self) -> u64 {
        self.total() / 2
    }

    /// Pixels applied at the right/bottom edge
    pub const fn trailing(&self) -> u64 {
        self.total() - self.leading()
    }

    /// Whether this axis is cropped
    pub const fn is_clip(&self) -> bool {
        matches!(self, Self::Clip(_))
    }

    /// Position of the montage origin on the canvas
    ///
    /// Positive when padding shifts the montage inward, negative when the
    /// crop starts inside the montage.
    pub const fn origin_offset(&self) -> i64 {
        match self {
            Self::Pad(_) => self.leading() as i64,
            Self::Clip(_) => -(self.leading() as i64),
            Self::Exact => 0,
        }
    }

    /// Dimension after applying the adjustment to a montage dimension
    pub const fn apply(&self, montage: u64) -> u64 {
        match self {
            Self::Pad(pixels) => montage + *pixels,
            Self::Clip(pixels) => montage.saturating_sub(*pixels),
            Self::Exact => montage,
        }
    }

    /// Share of one edge cell lost to cropping on each edge
    pub fn edge_clip_fraction(&self, cell: u64) -> f64 {
        match self {
            Self::Clip(pixels) if cell > 0 => *pixels as f64 / 2.0 / cell as f64,
            _ => 0.0,
        }
    }
}

/// How a candidate reaches the canvas on both axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStrategy {
    /// Neither axis is cropped
    PadBoth,
    /// Horizontal axis cropped, vertical padded or exact
    ClipHorizontalPadVertical,
    /// Vertical axis cropped, horizontal padded or exact
    ClipVerticalPadHorizontal,
    /// Both axes cropped
    ClipBoth,
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PadBoth => "pad_both",
            Self::ClipHorizontalPadVertical => "clip_h_pad_v",
            Self::ClipVerticalPadHorizontal => "clip_v_pad_h",
            Self::ClipBoth => "clip_both",
        };
        f.pad(name)
    }
}

/// Horizontal and vertical adjustments for one montage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeAdjustment {
    /// Left/right adjustment
    pub horizontal: AxisAdjustment,
    /// Top/bottom adjustment
    pub vertical: AxisAdjustment,
}

impl EdgeAdjustment {
    /// Adjustments that turn a `width × height` montage into a `side × side` canvas
    pub const fn between(montage_width: u64, montage_height: u64, side: u64) -> Self {
        Self {
            horizontal: AxisAdjustment::between(montage_width, side),
            vertical: AxisAdjustment::between(montage_height, side),
        }
    }

    /// Padding pixels summed over both axes
    pub const fn total_padding(&self) -> u64 {
        self.horizontal.padding() + self.vertical.padding()
    }

    /// Clipping pixels summed over both axes
    pub const fn total_clipping(&self) -> u64 {
        self.horizontal.clipping() + self.vertical.clipping()
    }

    /// Every adjusted pixel, padding and clipping together
    pub const fn total(&self) -> u64 {
        self.horizontal.total() + self.vertical.total()
    }

    /// Classify the adjustment
    pub const fn strategy(&self) -> FitStrategy {
        match (self.horizontal.is_clip(), self.vertical.is_clip()) {
            (true, true) => FitStrategy::ClipBoth,
            (true, false) => FitStrategy::ClipHorizontalPadVertical,
            (false, true) => FitStrategy::ClipVerticalPadHorizontal,
            (false, false) => FitStrategy::PadBoth,
        }
    }

    /// Final `(width, height)` after applying both axes
    pub const fn apply(&self, montage_width: u64, montage_height: u64) -> (u64, u64) {
        (
            self.horizontal.apply(montage_width),
            self.vertical.apply(montage_height),
        )
    }
}
