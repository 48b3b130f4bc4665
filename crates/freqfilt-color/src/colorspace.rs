//! Grayscale color-space conversion
//!
//! Reduces an image to the single luminance channel that the frequency
//! filters transform. Luminance follows ITU-R BT.601:
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//!
//! evaluated in 14-bit fixed point with round-to-nearest, so results are
//! exact integers and white maps to exactly 255.

use crate::{ColorError, ColorResult};
use freqfilt_core::{DPix, Pix, PixelDepth, color};

/// Fixed-point precision of the luminance weights
const GRAY_SHIFT: u32 = 14;
/// Red weight, `round(0.299 * 2^14)`
const RED_WEIGHT: u32 = 4899;
/// Green weight, `round(0.587 * 2^14)`
const GREEN_WEIGHT: u32 = 9617;
/// Blue weight, `round(0.114 * 2^14)`
const BLUE_WEIGHT: u32 = 1868;

/// Convert one RGB sample to its 8-bit luminance.
///
/// # Examples
///
/// ```
/// use freqfilt_color::rgb_to_gray;
///
/// assert_eq!(rgb_to_gray(255, 255, 255), 255);
/// assert_eq!(rgb_to_gray(255, 0, 0), 76);
/// ```
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let sum = u32::from(r) * RED_WEIGHT
        + u32::from(g) * GREEN_WEIGHT
        + u32::from(b) * BLUE_WEIGHT
        + (1 << (GRAY_SHIFT - 1));
    // weights sum to 2^14, so the shifted value never exceeds 255
    (sum >> GRAY_SHIFT) as u8
}

/// True for 1 to 16 bpp images with one sample per pixel.
fn is_single_channel(pix: &Pix) -> bool {
    pix.depth() != PixelDepth::Bit32 && pix.spp() == 1
}

/// Convert an image to grayscale.
///
/// - 32 bpp RGB / RGBA: each pixel is reduced with [`rgb_to_gray`] into an
///   8 bpp image; alpha is ignored.
/// - 1 to 16 bpp single channel: already gray, returned as an independent
///   copy at its own depth.
///
/// The input is never modified.
///
/// # Errors
///
/// Returns [`ColorError::InvalidChannel`] if the samples per pixel do not
/// fit the depth.
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    match (pix.depth(), pix.spp()) {
        _ if is_single_channel(pix) => Ok(pix.deep_clone()),
        (PixelDepth::Bit32, 3 | 4) => {
            let (w, h) = pix.dimensions();
            let mut gray = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
            gray.copy_resolution_from(pix);
            for y in 0..h {
                for x in 0..w {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    gray.set_pixel_unchecked(x, y, u32::from(rgb_to_gray(r, g, b)));
                }
            }
            Ok(gray.into())
        }
        (depth, spp) => Err(ColorError::InvalidChannel {
            depth: depth.bits(),
            spp,
        }),
    }
}

/// Convert an image to grayscale and widen it to `f64`.
///
/// This is the input stage of the frequency filters. Single-channel
/// samples keep their full range, so a 16 bpp image widens to values up
/// to 65535.
///
/// # Errors
///
/// Same as [`pix_convert_to_gray`].
pub fn pix_to_gray_dpix(pix: &Pix) -> ColorResult<DPix> {
    if is_single_channel(pix) {
        return Ok(DPix::from_pix(pix)?);
    }
    let gray = pix_convert_to_gray(pix)?;
    Ok(DPix::from_pix(&gray)?)
}
