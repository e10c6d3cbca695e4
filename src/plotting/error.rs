//! Error types for plot data generation.

use std::fmt;

/// The main error type for plot data generation.
#[derive(Debug)]
pub enum PlotError {
    /// A set index token that is not an integer
    InvalidSetIndex(String),
    /// Set index with no palette entry
    PaletteOutOfRange { index: usize, len: usize },
    /// Set index with no display name
    UnknownSet { index: usize, count: usize },
    /// Invalid data provided for plotting
    InvalidData(String),
    /// Invalid configuration or parameters
    InvalidConfig(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::InvalidSetIndex(token) => {
                write!(f, "Invalid set index '{}': not an integer", token)
            }
            PlotError::PaletteOutOfRange { index, len } => write!(
                f,
                "No color for set {}: palette has {} entries",
                index, len
            ),
            PlotError::UnknownSet { index, count } => {
                write!(f, "No name for set {}: {} set names given", index, count)
            }
            PlotError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {}

/// Result type alias for plot data operations.
pub type PlotResult<T> = Result<T, PlotError>;
