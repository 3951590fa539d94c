/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and output defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of peeled grids
pub mod image;
/// Text grid parsing
pub mod parse;
/// Multi-file progress display
pub mod progress;
/// Cascade animation export
pub mod visualization;
