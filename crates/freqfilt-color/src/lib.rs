//! freqfilt-color - Color conversion for frequency-domain filtering
//!
//! The filters operate on a single luminance channel. This crate reduces
//! 32 bpp RGB input to that channel ([`colorspace`]) and passes 1 to 16 bpp
//! single-channel images through unchanged.

pub mod colorspace;
pub mod error;

// Re-export core types
pub use freqfilt_core;

pub use colorspace::{pix_convert_to_gray, pix_to_gray_dpix, rgb_to_gray};
pub use error::{ColorError, ColorResult};
