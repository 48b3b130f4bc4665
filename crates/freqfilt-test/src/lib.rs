//! freqfilt-test - Regression test support for freqfilt
//!
//! Each `tests/*_reg.rs` file drives one [`RegParams`], runs numbered
//! checks against it and asserts on [`RegParams::cleanup`]. Inputs are
//! built in memory by [`synth`], so expected values can be worked out by
//! hand and no image files are needed.
//!
//! Text output written with [`RegParams::write_data_and_check`] lands in
//! `tests/regout/`; goldens live in `tests/golden/`. Set `REGTEST_MODE`
//! to `generate` to refresh goldens, `display` to skip comparison, or
//! leave it unset to compare.
//!
//! ```
//! use freqfilt_test::{RegParams, checkerboard_gray};
//!
//! let mut rp = RegParams::new("doc");
//! let pix = checkerboard_gray(8, 8, 1, 0, 255).unwrap();
//! rp.compare_values(8.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use synth::{checkerboard_gray, rgb_pattern, textured_gray, uniform_gray};

// this crate sits at crates/freqfilt-test
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden files.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory receiving this run's output.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
