//! Centered zero padding
//!
//! Embeds a float image in a larger zero field so that the original block
//! sits in the middle. When the size difference along an axis is odd the
//! extra pixel goes on the trailing side (right / bottom).

use crate::{FilterError, FilterResult};
use freqfilt_core::DPix;

/// Leading and trailing pad for one axis.
///
/// Returns `None` when `target < len`.
///
/// # Examples
///
/// ```
/// use freqfilt_filter::pad_amounts;
///
/// assert_eq!(pad_amounts(3, 8), Some((2, 3)));
/// assert_eq!(pad_amounts(4, 8), Some((2, 2)));
/// assert_eq!(pad_amounts(9, 8), None);
/// ```
pub fn pad_amounts(len: u32, target: u32) -> Option<(u32, u32)> {
    let total = target.checked_sub(len)?;
    let lead = total / 2;
    Some((lead, total - lead))
}

/// Zero-pad `source` to exactly `width x height`, keeping it centered.
///
/// Values inside the source block are copied unchanged; everything
/// around it is 0. Padding to the source's own size returns an equal
/// image. The source is not modified.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDimension`] if `width` or `height` is
/// smaller than the source along that axis, and a core error if either
/// target dimension is 0.
pub fn square_zero_pad(source: &DPix, width: u32, height: u32) -> FilterResult<DPix> {
    let (sw, sh) = source.dimensions();
    let invalid = || FilterError::InvalidDimension {
        from: (sw, sh),
        to: (width, height),
    };
    let (left, _) = pad_amounts(sw, width).ok_or_else(invalid)?;
    let (top, _) = pad_amounts(sh, height).ok_or_else(invalid)?;

    let mut out = DPix::new(width, height)?;
    let (xres, yres) = source.resolution();
    out.set_resolution(xres, yres);

    let x0 = left as usize;
    for y in 0..sh {
        out.row_mut(top + y)[x0..x0 + sw as usize].copy_from_slice(source.row(y));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: u32, h: u32) -> DPix {
        let data = (0..w * h).map(|v| f64::from(v + 1)).collect();
        DPix::from_data(w, h, data).unwrap()
    }

    #[test]
    fn test_pad_amounts_odd_difference_trails() {
        assert_eq!(pad_amounts(1, 4), Some((1, 2)));
        assert_eq!(pad_amounts(2, 7), Some((2, 3)));
        assert_eq!(pad_amounts(5, 5), Some((0, 0)));
        assert_eq!(pad_amounts(0, 3), Some((1, 2)));
    }

    #[test]
    fn test_pad_places_block() {
        let src = ramp(2, 1);
        let out = square_zero_pad(&src, 5, 4).unwrap();
        assert_eq!(out.dimensions(), (5, 4));
        // left = 1, top = 1
        assert_eq!(out.row(0), &[0.0; 5]);
        assert_eq!(out.row(1), &[0.0, 1.0, 2.0, 0.0, 0.0]);
        assert_eq!(out.row(2), &[0.0; 5]);
        assert_eq!(out.row(3), &[0.0; 5]);
    }

    #[test]
    fn test_pad_same_size_is_identity() {
        let src = ramp(3, 4);
        let out = square_zero_pad(&src, 3, 4).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_pad_negative_is_error() {
        let src = ramp(4, 4);
        assert!(matches!(
            square_zero_pad(&src, 3, 8),
            Err(FilterError::InvalidDimension { .. })
        ));
        assert!(matches!(
            square_zero_pad(&src, 8, 3),
            Err(FilterError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_pad_does_not_touch_source() {
        let src = ramp(2, 2);
        let before = src.clone();
        let _ = square_zero_pad(&src, 6, 6).unwrap();
        assert_eq!(src, before);
    }
}
