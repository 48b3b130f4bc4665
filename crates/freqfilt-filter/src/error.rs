//! Error types for freqfilt-filter

use thiserror::Error;

/// Errors that can occur during frequency-domain filtering
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] freqfilt_core::Error),

    /// Grayscale conversion error
    #[error("color error: {0}")]
    Color(#[from] freqfilt_color::ColorError),

    /// Kernel and spectrum shapes differ
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        /// Spectrum (width, height)
        expected: (u32, u32),
        /// Kernel (width, height)
        actual: (u32, u32),
    },

    /// Padding target smaller than the block being padded
    #[error("invalid dimension: cannot pad {}x{} to {}x{}", .from.0, .from.1, .to.0, .to.1)]
    InvalidDimension {
        /// Block (width, height)
        from: (u32, u32),
        /// Requested (width, height)
        to: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
