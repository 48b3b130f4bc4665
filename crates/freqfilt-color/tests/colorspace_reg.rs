//! Grayscale conversion regression test
//!
//! RGB to luminance conversion against the floating-point BT.601 weights,
//! and passthrough of single-channel images at every depth below 32 bpp.

use freqfilt_color::{pix_convert_to_gray, pix_to_gray_dpix, rgb_to_gray};
use freqfilt_core::{DPix, Pix, PixelDepth};
use freqfilt_test::{RegParams, rgb_pattern, textured_gray};

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Test 1: fixed point stays within rounding of the float weights ---
    let mut worst: f64 = 0.0;
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(51) {
                let exact = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
                let fixed = f64::from(rgb_to_gray(r, g, b));
                worst = worst.max((exact - fixed).abs());
            }
        }
    }
    rp.compare_values(0.0, worst, 0.51);
    eprintln!("  max |fixed - float| = {:.4}", worst);

    // --- Test 2: RGB image ---
    let pixs = rgb_pattern(20, 12).expect("rgb_pattern");
    let gray = pix_convert_to_gray(&pixs).expect("pix_convert_to_gray");
    rp.compare_values(8.0, gray.depth().bits() as f64, 0.0);
    rp.compare_values(20.0, gray.width() as f64, 0.0);
    rp.compare_values(12.0, gray.height() as f64, 0.0);
    let (r, g, b) = pixs.get_rgb(3, 5).unwrap();
    rp.compare_values(
        f64::from(rgb_to_gray(r, g, b)),
        gray.get_pixel(3, 5).unwrap() as f64,
        0.0,
    );
    let dpix = pix_to_gray_dpix(&pixs).expect("pix_to_gray_dpix");
    rp.compare_values(gray.get_pixel(19, 11).unwrap() as f64, dpix.get_pixel(19, 11).unwrap(), 0.0);

    // --- Test 3: RGBA ignores alpha ---
    let mut pm = pixs.to_mut();
    pm.set_spp(4).expect("set_spp");
    let rgba: Pix = pm.into();
    let gray_rgba = pix_convert_to_gray(&rgba).expect("rgba to gray");
    rp.compare_pix(&gray, &gray_rgba);

    // --- Test 4: 8 bpp passes through unchanged ---
    let pix8 = textured_gray(9, 9).expect("textured_gray");
    let same = pix_convert_to_gray(&pix8).expect("gray passthrough");
    rp.compare_pix(&pix8, &same);

    // --- Test 5: other single-channel depths are already gray ---
    for depth in [PixelDepth::Bit1, PixelDepth::Bit4, PixelDepth::Bit16] {
        let mut pm = Pix::new(4, 4, depth).unwrap().to_mut();
        pm.set_pixel(3, 2, depth.max_value()).unwrap();
        let pix: Pix = pm.into();
        let same = pix_convert_to_gray(&pix).expect("single-channel passthrough");
        rp.compare_pix(&pix, &same);
        let dpix = pix_to_gray_dpix(&pix).expect("single-channel to dpix");
        rp.compare_dpix(&DPix::from_pix(&pix).unwrap(), &dpix, 0.0);
        rp.compare_values(f64::from(depth.max_value()), dpix.get_pixel(3, 2).unwrap(), 0.0);
    }

    assert!(rp.cleanup(), "colorspace regression test failed");
}
