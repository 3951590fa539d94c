//! Error types for grid loading, peeling setup and rendering

use std::fmt;
use std::path::PathBuf;

/// Reasons a text or boolean grid is rejected before a peeler is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// The grid has no rows, or its rows have no cells
    EmptyGrid,

    /// A row's width differs from the first row's width
    RaggedRow {
        /// Zero-based index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// A character is neither the occupied nor the empty symbol
    UnrecognizedSymbol {
        /// Zero-based row of the character
        row: usize,
        /// Zero-based column of the character
        column: usize,
        /// The rejected character
        symbol: char,
    },
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid contains no cells"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has width {found}, expected {expected}",
                row + 1
            ),
            Self::UnrecognizedSymbol {
                row,
                column,
                symbol,
            } => write!(
                f,
                "unrecognized symbol {symbol:?} at row {}, column {}",
                row + 1,
                column + 1
            ),
        }
    }
}

/// Main error type for all peeling operations
#[derive(Debug)]
pub enum PeelError {
    /// Input grid failed validation; no peeler was constructed
    MalformedInput {
        /// What is wrong with the grid
        reason: MalformedInput,
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

    /// A render was requested but there is nothing to draw
    NothingToRender {
        /// Why the render is empty
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

impl fmt::Display for PeelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason } => write!(f, "Malformed input: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' with value '{value}': {reason}"
                )
            }
            Self::NothingToRender { reason } => write!(f, "Nothing to render: {reason}"),
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image '{}': {source}", path.display())
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

impl std::error::Error for PeelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<MalformedInput> for PeelError {
    fn from(reason: MalformedInput) -> Self {
        Self::MalformedInput { reason }
    }
}

/// Convenience type alias for peeling results
pub type Result<T> = std::result::Result<T, PeelError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PeelError {
    PeelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PeelError {
    PeelError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
