//! Error types and path context for optimizer and CLI operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a layout request could not be satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The request supplied no tiles at all
    NoTiles,
    /// No grid and cell scale stayed within the clipping and cell-size limits
    NoFeasibleGrid,
    /// The search step budget ran out before any candidate was found
    SearchBudgetExhausted,
    /// A requested grid has more slots than there are tiles
    GridExceedsPool,
    /// A requested grid has zero columns or zero rows
    EmptyGrid,
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoTiles => "no tiles available",
            Self::NoFeasibleGrid => "no grid fits the canvas within the clipping limits",
            Self::SearchBudgetExhausted => "search budget exhausted before a candidate was found",
            Self::GridExceedsPool => "grid has more slots than available tiles",
            Self::EmptyGrid => "grid must have at least one column and one row",
        };
        f.write_str(text)
    }
}

/// Main error type for all layout operations
#[derive(Debug)]
pub enum LayoutError {
    /// No candidate grid satisfies the feasibility constraints
    InfeasibleLayout {
        /// Tile count supplied by the caller
        available_tiles: u32,
        /// Canvas side the layout had to fill
        canvas_side: u32,
        /// Which constraint ruled the request out
        reason: InfeasibleReason,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Configuration file could not be parsed
    Config {
        /// Path of the configuration source
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Build manifest could not be serialized
    Manifest {
        /// Destination of the manifest
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfeasibleLayout {
                available_tiles,
                canvas_side,
                reason,
            } => {
                write!(
                    f,
                    "Infeasible layout for {available_tiles} tiles on a {canvas_side}x{canvas_side} canvas: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Config { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::Manifest { path, source } => {
                write!(
                    f,
                    "Failed to serialize manifest for '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config { source, .. } => Some(source),
            Self::Manifest { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`LayoutError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LayoutError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LayoutError {
    LayoutError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl LayoutError {
    /// Whether this is the optimizer's infeasibility error
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::InfeasibleLayout { .. })
    }

    /// Infeasibility reason, if this is an infeasible-layout error
    pub const fn infeasible_reason(&self) -> Option<InfeasibleReason> {
        match self {
            Self::InfeasibleLayout { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
