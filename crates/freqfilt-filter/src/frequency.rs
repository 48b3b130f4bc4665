//! Frequency-domain filtering
//!
//! Filters an image by masking its centered spectrum:
//!
//! 1. Reduce to grayscale
//! 2. Forward 2D FFT, then [`fftshift`] so the zero frequency is centered
//! 3. Multiply by a binary kernel of the same shape
//! 4. [`ifftshift`], inverse 2D FFT
//! 5. Take the magnitude of each complex sample
//!
//! The result is a float image with the input's dimensions. It is neither
//! clamped nor rescaled; use [`DPix::to_pix`] to get back to 8 bpp.
//!
//! See [`crate::kernel`] for how the "high" and "low" kernel names relate
//! to the frequencies they keep.

use crate::fft::{Spectrum, check_shape, fft2, fftshift, ifft2, ifftshift};
use crate::kernel::{PassType, high_pass_kernel, low_pass_kernel};
use crate::{FilterError, FilterResult};
use freqfilt_color::pix_to_gray_dpix;
use freqfilt_core::{DPix, Pix};
use log::debug;

/// Default side length of the centered kernel block
pub const DEFAULT_KERNEL_SIZE: u32 = 3;

// ============================================================================
// Option structures
// ============================================================================

/// Options for [`pass_filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyFilterOptions {
    /// Which kernel to apply
    pub pass_type: PassType,
    /// Side length of the centered block (0 to min(width, height))
    pub size: u32,
}

impl Default for FrequencyFilterOptions {
    fn default() -> Self {
        Self {
            pass_type: PassType::High,
            size: DEFAULT_KERNEL_SIZE,
        }
    }
}

impl FrequencyFilterOptions {
    /// Check that the kernel block fits a `width x height` image.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `size` exceeds either
    /// dimension.
    pub fn validate(&self, width: u32, height: u32) -> FilterResult<()> {
        if self.size > width || self.size > height {
            return Err(FilterError::InvalidParameters(format!(
                "kernel size {} does not fit {}x{} image",
                self.size, width, height
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Mask the centered spectrum of a grayscale float image and transform back.
///
/// Returns the complex reconstruction before the magnitude step. Because
/// every stage is linear, the reconstructions for two complementary
/// kernels add up to `gray`.
///
/// # Arguments
/// * `gray` - Single-channel float image
/// * `kernel` - Mask with the same dimensions as `gray`
///
/// # Errors
///
/// Returns [`FilterError::ShapeMismatch`] if the kernel shape differs from
/// the image shape.
pub fn filter_spectrum(gray: &DPix, kernel: &DPix) -> FilterResult<Spectrum> {
    check_shape(gray.dimensions(), kernel.dimensions())?;

    let shifted = fftshift(&fft2(gray));
    let masked = shifted.multiply(kernel)?;
    Ok(ifft2(&ifftshift(&masked)))
}

/// Filter an image with an arbitrary frequency-domain kernel.
///
/// # Arguments
/// * `source` - 1 to 16 bpp single-channel or 32 bpp RGB/RGBA image
/// * `kernel` - Mask applied to the fft-shifted spectrum, same dimensions
///   as `source`
///
/// # Returns
/// Magnitude of the filtered image, same dimensions and resolution as
/// `source`.
///
/// # Errors
///
/// - [`FilterError::Color`] if the samples per pixel do not fit the depth
/// - [`FilterError::ShapeMismatch`] if the kernel shape differs
pub fn frequency_filter(source: &Pix, kernel: &DPix) -> FilterResult<DPix> {
    let gray = pix_to_gray_dpix(source)?;
    debug!(
        "frequency filter: {}x{} image, kernel sum {}",
        gray.width(),
        gray.height(),
        kernel.sum()
    );

    let filtered = filter_spectrum(&gray, kernel)?;
    let mut out = filtered.magnitude()?;
    out.set_resolution(source.xres(), source.yres());
    Ok(out)
}

/// Apply [`high_pass_kernel`] of the given `size`.
///
/// Keeps the centered block of the shifted spectrum, which holds the
/// lowest frequencies.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDimension`] if `size` exceeds the image
/// width or height, otherwise as [`frequency_filter`].
pub fn high_pass_filter(source: &Pix, size: u32) -> FilterResult<DPix> {
    let kernel = high_pass_kernel(source.width(), source.height(), size)?;
    frequency_filter(source, &kernel)
}

/// Apply [`low_pass_kernel`] of the given `size`.
///
/// Removes the centered block of the shifted spectrum and keeps the rest.
///
/// # Errors
///
/// Same as [`high_pass_filter`].
pub fn low_pass_filter(source: &Pix, size: u32) -> FilterResult<DPix> {
    let kernel = low_pass_kernel(source.width(), source.height(), size)?;
    frequency_filter(source, &kernel)
}

/// Filter with the kernel and size selected in `options`.
///
/// # Example
/// ```ignore
/// let options = FrequencyFilterOptions { pass_type: PassType::Low, size: 5 };
/// let edges = pass_filter(&pix, &options)?;
/// ```
pub fn pass_filter(source: &Pix, options: &FrequencyFilterOptions) -> FilterResult<DPix> {
    options.validate(source.width(), source.height())?;
    match options.pass_type {
        PassType::High => high_pass_filter(source, options.size),
        PassType::Low => low_pass_filter(source, options.size),
    }
}
