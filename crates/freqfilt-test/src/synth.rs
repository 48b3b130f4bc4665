//! Synthetic test images
//!
//! The regression tests build their inputs in memory instead of reading
//! image files, so every expected value can be derived by hand.

use crate::error::{TestError, TestResult};
use freqfilt_core::{Pix, PixelDepth, color};

fn build_error(name: &str, e: freqfilt_core::Error) -> TestError {
    TestError::ImageBuild {
        name: name.to_string(),
        message: e.to_string(),
    }
}

/// 8 bpp checkerboard with square cells of side `cell`.
///
/// The cell containing (0, 0) has value `lo`, its neighbors `hi`.
pub fn checkerboard_gray(w: u32, h: u32, cell: u32, lo: u8, hi: u8) -> TestResult<Pix> {
    let name = "checkerboard_gray";
    if cell == 0 {
        return Err(TestError::ImageBuild {
            name: name.to_string(),
            message: "cell size must be > 0".to_string(),
        });
    }
    let mut pm = Pix::new(w, h, PixelDepth::Bit8)
        .map_err(|e| build_error(name, e))?
        .to_mut();
    for y in 0..h {
        for x in 0..w {
            let val = if (x / cell + y / cell) % 2 == 0 { lo } else { hi };
            pm.set_pixel_unchecked(x, y, u32::from(val));
        }
    }
    Ok(pm.into())
}

/// 8 bpp image where every pixel has value `val`.
pub fn uniform_gray(w: u32, h: u32, val: u8) -> TestResult<Pix> {
    let mut pm = Pix::new(w, h, PixelDepth::Bit8)
        .map_err(|e| build_error("uniform_gray", e))?
        .to_mut();
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel_unchecked(x, y, u32::from(val));
        }
    }
    Ok(pm.into())
}

/// 8 bpp image with a deterministic, non-periodic texture.
///
/// Values mix a diagonal ramp with a multiplicative hash so the image
/// has energy at every spatial frequency.
pub fn textured_gray(w: u32, h: u32) -> TestResult<Pix> {
    let mut pm = Pix::new(w, h, PixelDepth::Bit8)
        .map_err(|e| build_error("textured_gray", e))?
        .to_mut();
    for y in 0..h {
        for x in 0..w {
            let hash = (x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663)) % 97;
            let val = (3 * x + 5 * y + hash) % 256;
            pm.set_pixel_unchecked(x, y, val);
        }
    }
    Ok(pm.into())
}

/// 32 bpp RGB image: red ramps along x, green along y, blue constant.
pub fn rgb_pattern(w: u32, h: u32) -> TestResult<Pix> {
    let mut pm = Pix::new(w, h, PixelDepth::Bit32)
        .map_err(|e| build_error("rgb_pattern", e))?
        .to_mut();
    for y in 0..h {
        for x in 0..w {
            let r = (x * 37 % 256) as u8;
            let g = (y * 53 % 256) as u8;
            pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, 128));
        }
    }
    Ok(pm.into())
}
