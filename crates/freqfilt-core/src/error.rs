//! Error types for freqfilt-core

use thiserror::Error;

/// Errors raised by the core image containers
#[derive(Error, Debug)]
pub enum Error {
    /// Zero width or height
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Bit count that is not a supported pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two images that must share a shape do not
    #[error("size mismatch: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    SizeMismatch { left: (u32, u32), right: (u32, u32) },

    /// Depth the operation cannot handle
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for freqfilt-core operations
pub type Result<T> = std::result::Result<T, Error>;
