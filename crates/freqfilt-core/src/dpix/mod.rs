//! Double-precision float images
//!
//! The frequency filters use [`DPix`] for grayscale input widened to
//! float, for binary kernels, and for the unclamped magnitude images they
//! return.
//!
//! # Examples
//!
//! ```
//! use freqfilt_core::DPix;
//!
//! let mut dpix = DPix::new(8, 4).unwrap();
//! dpix.set_pixel(3, 2, 0.5).unwrap();
//! assert_eq!(dpix.get_pixel(3, 2).unwrap(), 0.5);
//! assert_eq!(dpix.sum(), 0.5);
//! ```

use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// What [`DPix::to_pix`] does with negative values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeHandling {
    /// Write 0
    #[default]
    ClipToZero,
    /// Write `|v|`
    TakeAbsValue,
}

/// Row-major `f64` image without row padding
///
/// The value at (x, y) is `data[y * width + x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DPix {
    width: u32,
    height: u32,
    data: Vec<f64>,
    /// Resolution in ppi, 0 when unknown
    xres: i32,
    yres: i32,
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(width as usize * height as usize)
}

impl DPix {
    /// Zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Image with every value set to `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f64) -> Result<Self> {
        let len = pixel_count(width, height)?;
        Self::from_data(width, height, vec![value; len])
    }

    /// Wrap row-major values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for a zero size and
    /// `Error::InvalidParameter` if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "{} values for a {}x{} image",
                data.len(),
                width,
                height
            )));
        }
        Ok(DPix {
            width,
            height,
            data,
            xres: 0,
            yres: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// (xres, yres) in ppi
    #[inline]
    pub fn resolution(&self) -> (i32, i32) {
        (self.xres, self.yres)
    }

    #[inline]
    pub fn set_resolution(&mut self, xres: i32, yres: i32) {
        self.xres = xres;
        self.yres = yres;
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f64> {
        Ok(self.data[self.offset(x, y)?])
    }

    /// Overwrite the value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f64) -> Result<()> {
        let i = self.offset(x, y)?;
        self.data[i] = value;
        Ok(())
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Values of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f64] {
        let w = self.width as usize;
        &self.data[y as usize * w..][..w]
    }

    /// Mutable values of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f64] {
        let w = self.width as usize;
        &mut self.data[y as usize * w..][..w]
    }

    // ========================================================================
    // Pix conversion
    // ========================================================================

    /// Widen a single-channel `Pix` to `f64`, keeping its resolution.
    ///
    /// Color images have to go through a grayscale conversion first.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDepth` for 32 bpp input.
    pub fn from_pix(pix: &Pix) -> Result<Self> {
        if pix.depth() == PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(32));
        }
        let (width, height) = pix.dimensions();
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f64::from(pix.get_pixel_unchecked(x, y)))
            .collect();
        let mut dpix = DPix::from_data(width, height, data)?;
        dpix.set_resolution(pix.xres(), pix.yres());
        Ok(dpix)
    }

    /// Round to the nearest integer and store in a `Pix`.
    ///
    /// `out_depth` is 8, 16 or 32, or 0 to pick the smallest of those
    /// that holds the largest magnitude. Values above the depth maximum
    /// saturate; negative values follow `neg_handling`. 32 bpp output is
    /// a plain integer image (spp 4), not packed color.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for any other `out_depth`.
    pub fn to_pix(&self, out_depth: u32, neg_handling: NegativeHandling) -> Result<Pix> {
        let depth = match out_depth {
            0 => self.smallest_holding_depth(),
            8 | 16 | 32 => PixelDepth::from_bits(out_depth)?,
            _ => {
                return Err(Error::InvalidParameter(format!(
                    "out_depth {out_depth} is not one of 0, 8, 16, 32"
                )));
            }
        };

        let mut pm = Pix::new(self.width, self.height, depth)?.to_mut();
        pm.set_resolution(self.xres, self.yres);
        if depth == PixelDepth::Bit32 {
            pm.set_spp(4)?;
        }

        let ceiling = f64::from(depth.max_value());
        let quantize = |v: f64| {
            let v = match neg_handling {
                _ if v >= 0.0 => v,
                NegativeHandling::ClipToZero => 0.0,
                NegativeHandling::TakeAbsValue => -v,
            };
            (v + 0.5).min(ceiling) as u32
        };
        for y in 0..self.height {
            for (x, &v) in self.row(y).iter().enumerate() {
                pm.set_pixel_unchecked(x as u32, y, quantize(v));
            }
        }
        Ok(pm.into())
    }

    fn smallest_holding_depth(&self) -> PixelDepth {
        let peak = self.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        if peak <= 255.5 {
            PixelDepth::Bit8
        } else if peak <= 65535.5 {
            PixelDepth::Bit16
        } else {
            PixelDepth::Bit32
        }
    }

    // ========================================================================
    // Elementwise arithmetic
    // ========================================================================

    /// Require both images to have the same width and height.
    ///
    /// # Errors
    ///
    /// Returns `Error::SizeMismatch` otherwise.
    pub fn check_same_size(&self, other: &DPix) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::SizeMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &DPix, op: impl Fn(f64, f64) -> f64) -> Result<DPix> {
        self.check_same_size(other)?;
        let mut out = self.clone();
        out.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a = op(*a, b));
        Ok(out)
    }

    pub fn add(&self, other: &DPix) -> Result<DPix> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &DPix) -> Result<DPix> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn mul(&self, other: &DPix) -> Result<DPix> {
        self.zip_with(other, |a, b| a * b)
    }

    /// `1 - v` everywhere; swaps the 0s and 1s of a binary mask.
    pub fn complement(&self) -> DPix {
        let mut out = self.clone();
        out.data.iter_mut().for_each(|v| *v = 1.0 - *v);
        out
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest `|self - other|` over all pixels.
    ///
    /// # Errors
    ///
    /// Returns `Error::SizeMismatch` if the sizes differ.
    pub fn max_abs_diff(&self, other: &DPix) -> Result<f64> {
        self.check_same_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(0.0, |m, (a, b)| f64::max(m, (a - b).abs())))
    }
}

macro_rules! dpix_binop {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait for &DPix {
            type Output = Result<DPix>;

            fn $method(self, rhs: Self) -> Self::Output {
                DPix::$method(self, rhs)
            }
        }
    };
}

dpix_binop!(Add, add);
dpix_binop!(Sub, sub);
dpix_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpix_creation() {
        let dpix = DPix::new(10, 20).unwrap();
        assert_eq!(dpix.dimensions(), (10, 20));
        assert!(dpix.data().iter().all(|&v| v == 0.0));
        assert!(DPix::new(0, 5).is_err());
        assert!(DPix::new(5, 0).is_err());
    }

    #[test]
    fn test_dpix_from_data() {
        let dpix = DPix::from_data(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(dpix.get_pixel(2, 0).unwrap(), 3.0);
        assert_eq!(dpix.get_pixel(0, 1).unwrap(), 4.0);
        assert_eq!(dpix.row(1), &[4.0, 5.0, 6.0]);
        assert!(DPix::from_data(3, 2, vec![1.0; 5]).is_err());
    }

    #[test]
    fn test_dpix_bounds() {
        let mut dpix = DPix::new(4, 4).unwrap();
        assert!(dpix.get_pixel(4, 0).is_err());
        assert!(dpix.set_pixel(0, 4, 1.0).is_err());
    }

    #[test]
    fn test_dpix_arithmetic() {
        let a = DPix::from_data(2, 1, vec![1.0, 2.0]).unwrap();
        let b = DPix::from_data(2, 1, vec![3.0, 5.0]).unwrap();
        assert_eq!((&a + &b).unwrap().data(), &[4.0, 7.0]);
        assert_eq!((&b - &a).unwrap().data(), &[2.0, 3.0]);
        assert_eq!((&a * &b).unwrap().data(), &[3.0, 10.0]);

        let c = DPix::new(1, 2).unwrap();
        assert!(a.add(&c).is_err());
    }

    #[test]
    fn test_dpix_complement() {
        let mask = DPix::from_data(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(mask.complement().data(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dpix_statistics() {
        let dpix = DPix::from_data(2, 2, vec![-1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(dpix.sum(), 8.0);
        assert_eq!(dpix.mean(), 2.0);
        assert_eq!(dpix.min_value(), -1.0);
        assert_eq!(dpix.max_value(), 4.0);
    }

    #[test]
    fn test_dpix_to_pix_rounding_and_clamp() {
        let dpix = DPix::from_data(4, 1, vec![-3.0, 1.4, 1.6, 300.0]).unwrap();
        let pix = dpix.to_pix(8, NegativeHandling::ClipToZero).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(1, 0), Some(1));
        assert_eq!(pix.get_pixel(2, 0), Some(2));
        assert_eq!(pix.get_pixel(3, 0), Some(255));

        let pix = dpix.to_pix(8, NegativeHandling::TakeAbsValue).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(3));
    }

    #[test]
    fn test_dpix_to_pix_auto_depth() {
        let small = DPix::new_with_value(2, 2, 200.0).unwrap();
        assert_eq!(small.to_pix(0, NegativeHandling::ClipToZero).unwrap().depth(), PixelDepth::Bit8);
        let mid = DPix::new_with_value(2, 2, 1000.0).unwrap();
        assert_eq!(mid.to_pix(0, NegativeHandling::ClipToZero).unwrap().depth(), PixelDepth::Bit16);
        let big = DPix::new_with_value(2, 2, 1.0e6).unwrap();
        let pix = big.to_pix(0, NegativeHandling::ClipToZero).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit32);
        assert_eq!(pix.get_pixel(1, 1), Some(1_000_000));
        assert!(small.to_pix(4, NegativeHandling::ClipToZero).is_err());
    }

    #[test]
    fn test_dpix_from_pix() {
        let mut pm = Pix::new(3, 2, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(2, 1, 77).unwrap();
        let pix: Pix = pm.into();
        let dpix = DPix::from_pix(&pix).unwrap();
        assert_eq!(dpix.get_pixel(2, 1).unwrap(), 77.0);
        assert_eq!(dpix.sum(), 77.0);

        let rgb = Pix::new(3, 2, PixelDepth::Bit32).unwrap();
        assert!(DPix::from_pix(&rgb).is_err());
    }
}
