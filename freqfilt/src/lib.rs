//! freqfilt - Frequency-domain image filtering for Rust
//!
//! Filters an image by transforming it to the Fourier domain, masking the
//! centered spectrum with a binary kernel, and transforming back.
//!
//! # Overview
//!
//! - Grayscale reduction of 8 bpp and 32 bpp RGB images ([`color`])
//! - Centered zero padding and binary kernels ([`filter`])
//! - 2D FFT, inverse FFT and spectrum shifting ([`filter::fft`])
//! - High-pass / low-pass convenience filters
//!
//! # Example
//!
//! ```
//! use freqfilt::{NegativeHandling, Pix, PixelDepth, low_pass_filter};
//!
//! // 8-bit grayscale input
//! let pix = Pix::new(32, 32, PixelDepth::Bit8).unwrap();
//! let filtered = low_pass_filter(&pix, 5).unwrap();
//! assert_eq!(filtered.dimensions(), (32, 32));
//!
//! // back to an 8 bpp image for display or storage
//! let out = filtered.to_pix(8, NegativeHandling::ClipToZero).unwrap();
//! assert_eq!(out.depth(), PixelDepth::Bit8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use freqfilt_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use freqfilt_color as color;
pub use freqfilt_filter as filter;

pub use freqfilt_filter::{
    FrequencyFilterOptions, PassType, frequency_filter, high_pass_filter, high_pass_kernel,
    low_pass_filter, low_pass_kernel, pass_filter,
};
