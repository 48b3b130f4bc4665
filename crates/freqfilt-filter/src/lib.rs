//! freqfilt-filter - Frequency-domain image filtering
//!
//! This crate provides filtering in the Fourier domain:
//!
//! - Centered zero padding ([`pad`])
//! - Binary high-pass / low-pass kernels ([`kernel`])
//! - 2D FFT, inverse FFT and spectrum shifting ([`fft`])
//! - The filter pipeline and convenience filters ([`frequency`])
//!
//! # Example
//!
//! ```
//! use freqfilt_core::{Pix, PixelDepth};
//! use freqfilt_filter::high_pass_filter;
//!
//! let pix = Pix::new(16, 16, PixelDepth::Bit8).unwrap();
//! let out = high_pass_filter(&pix, 3).unwrap();
//! assert_eq!(out.dimensions(), (16, 16));
//! ```

mod error;
pub mod fft;
pub mod frequency;
pub mod kernel;
pub mod pad;

pub use error::{FilterError, FilterResult};

// Re-export commonly used functions
pub use fft::{Spectrum, fft2, fftshift, ifft2, ifftshift};
pub use frequency::{
    DEFAULT_KERNEL_SIZE, FrequencyFilterOptions, filter_spectrum, frequency_filter,
    high_pass_filter, low_pass_filter, pass_filter,
};
pub use kernel::{PassType, high_pass_kernel, low_pass_kernel, pass_kernel};
pub use pad::{pad_amounts, square_zero_pad};
