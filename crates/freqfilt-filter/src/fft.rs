//! 2D discrete Fourier transform primitives
//!
//! - [`fft2`] / [`ifft2`]: separable 2D transform (rows, then columns)
//!   built on `rustfft`. The inverse is scaled by `1 / (width * height)`,
//!   so `ifft2(fft2(x))` reproduces `x`.
//! - [`fftshift`] / [`ifftshift`]: move the zero-frequency coefficient
//!   from `(0, 0)` to `(width / 2, height / 2)` and back. For odd sizes the
//!   two shifts differ by one sample; each is the exact inverse of the
//!   other.

use crate::{FilterError, FilterResult};
use freqfilt_core::DPix;
use log::trace;
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

/// Complex frequency-domain image
///
/// Row-major like [`DPix`]: the coefficient at (x, y) is at index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    width: u32,
    height: u32,
    data: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Create a spectrum with every coefficient set to zero.
    ///
    /// # Errors
    ///
    /// Returns a core `InvalidDimension` error if width or height is 0.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(freqfilt_core::Error::InvalidDimension { width, height }.into());
        }
        Ok(Spectrum {
            width,
            height,
            data: vec![Complex::new(0.0, 0.0); (width as usize) * (height as usize)],
        })
    }

    /// Create a spectrum from row-major coefficients.
    pub fn from_data(width: u32, height: u32, data: Vec<Complex<f64>>) -> FilterResult<Self> {
        let mut spectrum = Self::new(width, height)?;
        if data.len() != spectrum.data.len() {
            return Err(FilterError::InvalidParameters(format!(
                "data length {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        spectrum.data = data;
        Ok(spectrum)
    }

    /// Real-valued image as a spectrum with zero imaginary parts.
    pub fn from_dpix(dpix: &DPix) -> Self {
        Spectrum {
            width: dpix.width(),
            height: dpix.height(),
            data: dpix.data().iter().map(|&v| Complex::new(v, 0.0)).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn data(&self) -> &[Complex<f64>] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.data
    }

    /// Coefficient at (x, y), or `None` outside the spectrum.
    pub fn get(&self, x: u32, y: u32) -> Option<Complex<f64>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Elementwise product with a real mask of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ShapeMismatch`] if the mask shape differs.
    pub fn multiply(&self, mask: &DPix) -> FilterResult<Spectrum> {
        check_shape(self.dimensions(), mask.dimensions())?;
        let data = self
            .data
            .iter()
            .zip(mask.data())
            .map(|(&c, &m)| c * m)
            .collect();
        Ok(Spectrum {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Elementwise sum of two spectra of the same shape.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ShapeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Spectrum) -> FilterResult<Spectrum> {
        check_shape(self.dimensions(), other.dimensions())?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Spectrum {
            width: self.width,
            height: self.height,
            data,
        })
    }

    /// Magnitude `|z|` of every coefficient.
    pub fn magnitude(&self) -> FilterResult<DPix> {
        let data = self.data.iter().map(|c| c.norm()).collect();
        Ok(DPix::from_data(self.width, self.height, data)?)
    }

    /// Real part of every coefficient.
    pub fn real(&self) -> FilterResult<DPix> {
        let data = self.data.iter().map(|c| c.re).collect();
        Ok(DPix::from_data(self.width, self.height, data)?)
    }

    /// Circularly shift by `(dx, dy)`: the value at (x, y) moves to
    /// `((x + dx) % width, (y + dy) % height)`.
    fn roll(&self, dx: u32, dy: u32) -> Spectrum {
        let w = self.width as usize;
        let h = self.height as usize;
        let (dx, dy) = (dx as usize % w, dy as usize % h);
        let mut data = vec![Complex::new(0.0, 0.0); self.data.len()];
        for y in 0..h {
            let dst_row = ((y + dy) % h) * w;
            let src_row = &self.data[y * w..(y + 1) * w];
            // the row splits into two contiguous runs
            data[dst_row + dx..dst_row + w].copy_from_slice(&src_row[..w - dx]);
            data[dst_row..dst_row + dx].copy_from_slice(&src_row[w - dx..]);
        }
        Spectrum {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Require `actual` to equal `expected`, both as (width, height).
pub(crate) fn check_shape(expected: (u32, u32), actual: (u32, u32)) -> FilterResult<()> {
    if expected != actual {
        return Err(FilterError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Transform rows, then columns, in place.
fn transform_2d(spectrum: &mut Spectrum, direction: FftDirection) {
    let w = spectrum.width as usize;
    let h = spectrum.height as usize;
    trace!("{:?} fft over {}x{}", direction, w, h);

    let mut planner = FftPlanner::<f64>::new();

    // rows are contiguous; one call covers all of them
    planner.plan_fft(w, direction).process(&mut spectrum.data);

    let mut columns = vec![Complex::new(0.0, 0.0); w * h];
    for y in 0..h {
        for x in 0..w {
            columns[x * h + y] = spectrum.data[y * w + x];
        }
    }
    planner.plan_fft(h, direction).process(&mut columns);
    for x in 0..w {
        for y in 0..h {
            spectrum.data[y * w + x] = columns[x * h + y];
        }
    }
}

/// Forward 2D DFT of a real image.
///
/// The zero-frequency coefficient (sum of all pixels) lands at (0, 0).
pub fn fft2(dpix: &DPix) -> Spectrum {
    let mut spectrum = Spectrum::from_dpix(dpix);
    transform_2d(&mut spectrum, FftDirection::Forward);
    spectrum
}

/// Inverse 2D DFT, scaled by `1 / (width * height)`.
pub fn ifft2(spectrum: &Spectrum) -> Spectrum {
    let mut out = spectrum.clone();
    transform_2d(&mut out, FftDirection::Inverse);
    let scale = 1.0 / out.data.len() as f64;
    for c in &mut out.data {
        *c *= scale;
    }
    out
}

/// Move the zero-frequency coefficient to `(width / 2, height / 2)`.
pub fn fftshift(spectrum: &Spectrum) -> Spectrum {
    spectrum.roll(spectrum.width / 2, spectrum.height / 2)
}

/// Undo [`fftshift`], returning the zero-frequency coefficient to (0, 0).
pub fn ifftshift(spectrum: &Spectrum) -> Spectrum {
    let (w, h) = spectrum.dimensions();
    spectrum.roll(w - w / 2, h - h / 2)
}
