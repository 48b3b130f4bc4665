//! Packed integer images
//!
//! [`Pix`] is the input side of the filters. Any of the usual packed
//! depths can be stored, but only 8 bpp gray and 32 bpp RGB(A) have a
//! grayscale reading downstream.
//!
//! Rows are padded to whole 32-bit words and pixels are packed from the
//! most significant bit down, so a 32 bpp pixel reads `0xRRGGBBAA`.
//!
//! A `Pix` shares its buffer through an `Arc`. Writing goes through
//! [`PixMut`], obtained with [`Pix::try_into_mut`] (no copy when the
//! handle is unique) or [`Pix::to_mut`] (always copies).

mod access;

pub use access::*;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bits per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    Bit1 = 1,
    Bit2 = 2,
    Bit4 = 4,
    /// 8-bit gray
    Bit8 = 8,
    Bit16 = 16,
    /// Packed RGB or RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Parse a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] for anything but 1, 2, 4, 8, 16 or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        Ok(match bits {
            1 => PixelDepth::Bit1,
            2 => PixelDepth::Bit2,
            4 => PixelDepth::Bit4,
            8 => PixelDepth::Bit8,
            16 => PixelDepth::Bit16,
            32 => PixelDepth::Bit32,
            _ => return Err(Error::InvalidDepth(bits)),
        })
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Largest sample value at this depth.
    pub fn max_value(self) -> u32 {
        u32::MAX >> (32 - self.bits())
    }

    /// Samples per pixel a fresh image of this depth starts with.
    fn default_spp(self) -> u32 {
        if self == PixelDepth::Bit32 { 3 } else { 1 }
    }
}

/// Buffer and header shared by [`Pix`] and [`PixMut`]
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 1 for gray, 3 for RGB, 4 for RGBA
    spp: u32,
    /// 32-bit words per row
    wpl: u32,
    /// Resolution in ppi, 0 when unknown
    xres: i32,
    yres: i32,
    data: Vec<u32>,
}

impl PixData {
    fn row(&self, y: u32) -> &[u32] {
        let wpl = self.wpl as usize;
        let start = y as usize * wpl;
        &self.data[start..start + wpl]
    }

    fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let wpl = self.wpl as usize;
        let start = y as usize * wpl;
        &mut self.data[start..start + wpl]
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Words needed for one row, failing instead of wrapping on huge widths.
fn words_per_line(width: u32, depth: PixelDepth) -> Result<u32> {
    let bits = u64::from(width) * u64::from(depth.bits());
    u32::try_from(bits.div_ceil(32)).map_err(|_| {
        Error::InvalidParameter(format!("row of {} pixels at {} bpp is too wide", width, depth.bits()))
    })
}

/// Immutable, cheaply clonable integer image
///
/// # Examples
///
/// ```
/// use freqfilt_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(64, 48, PixelDepth::Bit8).unwrap();
/// assert_eq!(pix.dimensions(), (64, 48));
/// assert_eq!(pix.get_pixel(10, 10), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a zero-filled image. 32 bpp images start as RGB (spp 3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = words_per_line(width, depth)?;
        let inner = PixData {
            width,
            height,
            depth,
            spp: depth.default_spp(),
            wpl,
            xres: 0,
            yres: 0,
            data: vec![0; wpl as usize * height as usize],
        };
        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub fn xres(&self) -> i32 {
        self.inner.xres
    }

    #[inline]
    pub fn yres(&self) -> i32 {
        self.inner.yres
    }

    /// All packed words, row after row.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Same width, height and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.dimensions() == other.dimensions() && self.depth() == other.depth()
    }

    /// Number of handles sharing this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Copy that shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData::clone(&self.inner)),
        }
    }

    /// Take the buffer for writing if this is the only handle, otherwise
    /// hand `self` back.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// Writable copy; `self` is left untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData::clone(&self.inner),
        }
    }
}

/// Writable image, turned back into a [`Pix`] with `into()`
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    pub fn set_resolution(&mut self, xres: i32, yres: i32) {
        self.inner.xres = xres;
        self.inner.yres = yres;
    }

    pub fn copy_resolution_from(&mut self, src: &Pix) {
        self.set_resolution(src.xres(), src.yres());
    }

    /// Change samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `spp` is 3 or 4 for
    /// 32 bpp, or 1 for every other depth.
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        let valid = match self.inner.depth {
            PixelDepth::Bit32 => matches!(spp, 3 | 4),
            _ => spp == 1,
        };
        if !valid {
            return Err(Error::InvalidParameter(format!(
                "spp {} not valid for depth {}",
                spp,
                self.inner.depth.bits()
            )));
        }
        self.inner.spp = spp;
        Ok(())
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gray() {
        let pix = Pix::new(100, 200, PixelDepth::Bit8).unwrap();
        assert_eq!(pix.dimensions(), (100, 200));
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.spp(), 1);
        assert_eq!(pix.wpl(), 25);
        assert!(pix.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_new_rgb_defaults_to_three_samples() {
        assert_eq!(Pix::new(2, 2, PixelDepth::Bit32).unwrap().spp(), 3);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Pix::new(0, 10, PixelDepth::Bit8),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        ));
        assert!(Pix::new(10, 0, PixelDepth::Bit32).is_err());
    }

    #[test]
    fn test_rows_padded_to_words() {
        assert_eq!(Pix::new(33, 1, PixelDepth::Bit1).unwrap().wpl(), 2);
        assert_eq!(Pix::new(5, 1, PixelDepth::Bit8).unwrap().wpl(), 2);
        assert_eq!(Pix::new(3, 1, PixelDepth::Bit16).unwrap().wpl(), 2);
        assert_eq!(Pix::new(7, 1, PixelDepth::Bit32).unwrap().wpl(), 7);
    }

    #[test]
    fn test_depth_bits() {
        assert_eq!(PixelDepth::from_bits(32).unwrap(), PixelDepth::Bit32);
        assert!(matches!(PixelDepth::from_bits(24), Err(Error::InvalidDepth(24))));
        assert_eq!(PixelDepth::Bit1.max_value(), 1);
        assert_eq!(PixelDepth::Bit4.max_value(), 15);
        assert_eq!(PixelDepth::Bit8.max_value(), 255);
        assert_eq!(PixelDepth::Bit32.max_value(), u32::MAX);
    }

    #[test]
    fn test_unique_handle_is_writable() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let shared = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        assert!(shared.try_into_mut().is_err());
        assert_eq!(pix.ref_count(), 1);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_copies() {
        let pix = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
        let mut pm = pix.to_mut();
        pm.set_pixel(1, 1, 200).unwrap();
        let edited: Pix = pm.into();
        assert_eq!(pix.get_pixel(1, 1), Some(0));
        assert_eq!(edited.get_pixel(1, 1), Some(200));
        assert!(pix.sizes_equal(&edited));
    }

    #[test]
    fn test_set_spp() {
        let mut pm = Pix::new(2, 2, PixelDepth::Bit32).unwrap().to_mut();
        assert!(pm.set_spp(4).is_ok());
        assert!(pm.set_spp(1).is_err());
        let mut pm8 = Pix::new(2, 2, PixelDepth::Bit8).unwrap().to_mut();
        assert!(pm8.set_spp(3).is_err());
    }
}
