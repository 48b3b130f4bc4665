//! Error types for freqfilt-color

use thiserror::Error;

/// Errors that can occur during color conversion
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] freqfilt_core::Error),

    /// The image layout cannot be reduced to a single gray channel
    #[error("invalid channel layout for grayscale conversion: {depth} bpp, {spp} samples per pixel")]
    InvalidChannel { depth: u32, spp: u32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
