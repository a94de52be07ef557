/// Command-line interface and subcommand runner
pub mod cli;
/// Constants and TOML configuration
pub mod configuration;
/// Error types
pub mod error;
/// Stderr logger for the binary
pub mod logger;
/// JSON build manifest
pub mod manifest;
/// Tile directory scanning and selection
pub mod pool;
/// Sweep progress bar
pub mod progress;
/// Text reports for layouts
pub mod report;
