//! Binary frequency-domain kernels
//!
//! A kernel is a [`DPix`] mask of 0s and 1s with the same shape as the
//! spectrum it multiplies. Both kernels here are built around a centered
//! `size x size` block:
//!
//! - [`high_pass_kernel`]: ones inside the block, zeros outside
//! - [`low_pass_kernel`]: the complement, zeros inside, ones outside
//!
//! # Naming
//!
//! The filters multiply the *fft-shifted* spectrum, where the block center
//! holds the lowest frequencies. The "high-pass" kernel therefore keeps
//! the low-frequency block and the "low-pass" kernel keeps everything
//! else. The names are kept as they are; callers that want the textbook
//! behavior should use the opposite kernel.

use crate::FilterResult;
use crate::pad::square_zero_pad;
use freqfilt_core::DPix;

/// Which of the two complementary kernels to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassType {
    /// Centered block of ones, see [`high_pass_kernel`]
    #[default]
    High,
    /// Centered block of zeros, see [`low_pass_kernel`]
    Low,
}

/// Build the `width x height` kernel with a centered `size x size` block
/// of ones and zeros elsewhere.
///
/// The block is placed by [`square_zero_pad`], so for odd differences the
/// extra zero row / column is on the bottom / right. `size == 0` gives an
/// all-zero kernel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDimension`](crate::FilterError::InvalidDimension)
/// if `size` exceeds `width` or `height`, and a core error if `width` or
/// `height` is 0.
///
/// # Examples
///
/// ```
/// use freqfilt_filter::high_pass_kernel;
///
/// let kernel = high_pass_kernel(6, 6, 2).unwrap();
/// assert_eq!(kernel.sum(), 4.0);
/// assert_eq!(kernel.get_pixel(2, 2).unwrap(), 1.0);
/// assert_eq!(kernel.get_pixel(0, 0).unwrap(), 0.0);
/// ```
pub fn high_pass_kernel(width: u32, height: u32, size: u32) -> FilterResult<DPix> {
    if size == 0 {
        return Ok(DPix::new(width, height)?);
    }
    let block = DPix::new_with_value(size, size, 1.0)?;
    square_zero_pad(&block, width, height)
}

/// Build the complement of [`high_pass_kernel`]: `1 - high_pass_kernel`.
///
/// # Errors
///
/// Same as [`high_pass_kernel`].
pub fn low_pass_kernel(width: u32, height: u32, size: u32) -> FilterResult<DPix> {
    Ok(high_pass_kernel(width, height, size)?.complement())
}

/// Build the kernel selected by `pass_type`.
pub fn pass_kernel(width: u32, height: u32, pass_type: PassType, size: u32) -> FilterResult<DPix> {
    match pass_type {
        PassType::High => high_pass_kernel(width, height, size),
        PassType::Low => low_pass_kernel(width, height, size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;

    #[test]
    fn test_high_pass_kernel_layout() {
        let k = high_pass_kernel(8, 8, 3).unwrap();
        assert_eq!(k.dimensions(), (8, 8));
        assert_eq!(k.sum(), 9.0);
        // (8 - 3) / 2 = 2 leading, 3 trailing
        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..5).contains(&x) && (2..5).contains(&y);
                let expected = if inside { 1.0 } else { 0.0 };
                assert_eq!(k.get_pixel(x, y).unwrap(), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_kernel_non_square_image() {
        let k = high_pass_kernel(7, 4, 2).unwrap();
        assert_eq!(k.dimensions(), (7, 4));
        // columns 2..4, rows 1..3
        assert_eq!(k.row(0), &[0.0; 7]);
        assert_eq!(k.row(1), &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(k.row(2), &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(k.row(3), &[0.0; 7]);
    }

    #[test]
    fn test_low_pass_is_complement() {
        let high = high_pass_kernel(9, 6, 4).unwrap();
        let low = low_pass_kernel(9, 6, 4).unwrap();
        let sum = high.add(&low).unwrap();
        assert!(sum.data().iter().all(|&v| v == 1.0));
        assert_eq!(low.sum(), 54.0 - 16.0);
    }

    #[test]
    fn test_kernel_size_zero() {
        assert_eq!(high_pass_kernel(4, 3, 0).unwrap().sum(), 0.0);
        assert_eq!(low_pass_kernel(4, 3, 0).unwrap().sum(), 12.0);
    }

    #[test]
    fn test_kernel_full_size() {
        assert_eq!(high_pass_kernel(5, 5, 5).unwrap().sum(), 25.0);
        assert_eq!(low_pass_kernel(5, 5, 5).unwrap().sum(), 0.0);
    }

    #[test]
    fn test_kernel_too_large() {
        assert!(matches!(
            high_pass_kernel(4, 8, 5),
            Err(FilterError::InvalidDimension { .. })
        ));
        assert!(matches!(
            low_pass_kernel(8, 4, 5),
            Err(FilterError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_pass_kernel_dispatch() {
        let high = pass_kernel(6, 6, PassType::High, 2).unwrap();
        let low = pass_kernel(6, 6, PassType::Low, 2).unwrap();
        assert_eq!(high, high_pass_kernel(6, 6, 2).unwrap());
        assert_eq!(low, low_pass_kernel(6, 6, 2).unwrap());
        assert_eq!(PassType::default(), PassType::High);
    }
}
