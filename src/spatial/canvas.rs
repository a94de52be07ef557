//! Tile aspect ratio and square canvas specification

use crate::io::configuration::{
    DEFAULT_CANVAS_SIDE, DEFAULT_TILE_ASPECT, MAX_ASPECT_TERM, MAX_CANVAS_SIDE,
};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::math::ratio::reduce;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Aspect ratio of a source tile, always stored in lowest terms
///
/// A 300×400 tile and a 111×148 tile both become `3:4`. Cells are built as
/// integer multiples of this ratio so tiles are never stretched unevenly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TileAspect {
    width: u32,
    height: u32,
}

impl Default for TileAspect {
    fn default() -> Self {
        Self {
            width: DEFAULT_TILE_ASPECT.0,
            height: DEFAULT_TILE_ASPECT.1,
        }
    }
}

impl TileAspect {
    /// Create an aspect from tile dimensions, reducing to lowest terms
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] if either term is zero or the
    /// reduced ratio has a term larger than [`MAX_ASPECT_TERM`]
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (width, height) = reduce(width, height).ok_or_else(|| {
            invalid_parameter(
                "tile_aspect",
                &format!("{width}x{height}"),
                &"both terms must be positive",
            )
        })?;

        if width > MAX_ASPECT_TERM || height > MAX_ASPECT_TERM {
            return Err(invalid_parameter(
                "tile_aspect",
                &format!("{width}x{height}"),
                &format!("reduced terms must not exceed {MAX_ASPECT_TERM}"),
            ));
        }

        Ok(Self { width, height })
    }

    /// Reduced width term
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Reduced height term
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The smaller of the two terms
    pub const fn shortest_term(&self) -> u32 {
        if self.width < self.height {
            self.width
        } else {
            self.height
        }
    }

    /// `cols / rows` ratio at which a grid of these tiles is itself square
    pub fn square_grid_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    /// Cell dimensions `(width, height)` at the given integer scale
    pub const fn cell(&self, scale: u32) -> (u64, u64) {
        (
            self.width as u64 * scale as u64,
            self.height as u64 * scale as u64,
        )
    }
}

impl fmt::Display for TileAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for TileAspect {
    type Err = LayoutError;

    /// Parse `WIDTHxHEIGHT` or `WIDTH:HEIGHT`
    fn from_str(s: &str) -> Result<Self> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X', ':'])
            .ok_or_else(|| invalid_parameter("tile_aspect", &s, &"expected WIDTHxHEIGHT"))?;
        let parse_term = |term: &str| {
            term.trim()
                .parse::<u32>()
                .map_err(|err| invalid_parameter("tile_aspect", &s, &err))
        };

        Self::new(parse_term(width)?, parse_term(height)?)
    }
}

/// Square output canvas and the aspect of the tiles placed on it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CanvasSpec {
    side: u32,
    aspect: TileAspect,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            side: DEFAULT_CANVAS_SIDE,
            aspect: TileAspect::default(),
        }
    }
}

impl CanvasSpec {
    /// Create a canvas specification
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] if `side` is zero or larger
    /// than [`MAX_CANVAS_SIDE`]
    pub fn new(side: u32, aspect: TileAspect) -> Result<Self> {
        if side == 0 || side > MAX_CANVAS_SIDE {
            return Err(invalid_parameter(
                "canvas_side",
                &side,
                &format!("must be between 1 and {MAX_CANVAS_SIDE}"),
            ));
        }
        Ok(Self { side, aspect })
    }

    /// Canvas side length in pixels
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Tile aspect ratio in lowest terms
    pub const fn aspect(&self) -> TileAspect {
        self.aspect
    }
}
