//! Mathematical utilities for the optimizer

/// Greatest common divisor, ratio reduction and grid ratios
pub mod ratio;
