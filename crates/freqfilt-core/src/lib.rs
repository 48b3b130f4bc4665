//! freqfilt-core - Image containers for frequency-domain filtering
//!
//! - [`Pix`] / [`PixMut`]: packed integer image, shared / writable
//! - [`DPix`]: `f64` image holding kernels and filter output
//! - [`color`]: 32 bpp pixel packing

pub mod dpix;
pub mod error;
pub mod pix;

pub use dpix::{DPix, NegativeHandling};
pub use error::{Error, Result};
pub use pix::{Pix, PixMut, PixelDepth};

/// 32 bpp pixel packing.
///
/// A color pixel is the big-endian word `[r, g, b, a]`, i.e. `0xRRGGBBAA`.
pub mod color {
    /// Pack an opaque RGB pixel (alpha 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        u32::from_be_bytes([r, g, b, 0xff])
    }

    /// Unpack (r, g, b), ignoring alpha.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        let [r, g, b, _] = pixel.to_be_bytes();
        (r, g, b)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_and_extract() {
            let pixel = compose_rgb(0x12, 0x34, 0x56);
            assert_eq!(pixel, 0x1234_56ff);
            assert_eq!(extract_rgb(pixel), (0x12, 0x34, 0x56));
            assert_eq!(extract_rgb(0xaabb_cc00), (0xaa, 0xbb, 0xcc));
        }
    }
}
