//! Pixel access
//!
//! Pixels of depth `d < 32` sit `32 / d` to a word, the leftmost pixel in
//! the most significant bits. At 1 bpp pixel 0 is bit 31 of word 0; at
//! 8 bpp pixel 3 is the low byte of word 0.

use super::{Pix, PixData, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Word index and right shift of pixel `x` at `depth`.
#[inline]
fn locate(x: u32, depth: PixelDepth) -> (usize, u32) {
    let bits = depth.bits();
    let per_word = 32 / bits;
    let slot = x % per_word;
    ((x / per_word) as usize, 32 - bits * (slot + 1))
}

/// Read pixel `x` of a packed row.
#[inline]
pub fn get_packed(line: &[u32], x: u32, depth: PixelDepth) -> u32 {
    let (word, shift) = locate(x, depth);
    (line[word] >> shift) & depth.max_value()
}

/// Write pixel `x` of a packed row; `val` is masked to the depth.
#[inline]
pub fn set_packed(line: &mut [u32], x: u32, depth: PixelDepth, val: u32) {
    let (word, shift) = locate(x, depth);
    let mask = depth.max_value();
    let w = &mut line[word];
    *w = (*w & !(mask << shift)) | ((val & mask) << shift);
}

/// Read an 8-bit pixel of a packed row.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    get_packed(line, x, PixelDepth::Bit8)
}

/// Write an 8-bit pixel of a packed row.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    set_packed(line, x, PixelDepth::Bit8, val)
}

impl PixData {
    fn pixel(&self, x: u32, y: u32) -> u32 {
        get_packed(self.row(y), x, self.depth)
    }

    fn set_pixel(&mut self, x: u32, y: u32, val: u32) {
        let depth = self.depth;
        set_packed(self.row_mut(y), x, depth, val);
    }
}

impl Pix {
    /// Pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner.contains(x, y).then(|| self.inner.pixel(x, y))
    }

    /// Pixel at (x, y) without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` is past the row's last word.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.pixel(x, y)
    }

    /// (r, g, b) at (x, y); `None` outside the image or below 32 bpp.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    /// Pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner.contains(x, y).then(|| self.inner.pixel(x, y))
    }

    /// Write `val` (masked to the depth) at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.inner.contains(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        self.inner.set_pixel(x, y, val);
        Ok(())
    }

    /// Write without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` is past the row's last word.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.inner.set_pixel(x, y, val);
    }

    /// Write an opaque RGB pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] below 32 bpp and
    /// [`Error::OutOfBounds`] outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}
