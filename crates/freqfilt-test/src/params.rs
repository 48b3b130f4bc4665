//! Regression checks and golden-file bookkeeping

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use freqfilt_core::{DPix, Pix};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with golden files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Overwrite goldens with this run's output
    Generate,
    /// Check output against existing goldens
    #[default]
    Compare,
    /// Write output only
    Display,
}

impl RegTestMode {
    /// Mode named by `REGTEST_MODE`, compare when unset.
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Case-insensitive; anything unrecognized means compare.
    pub fn parse(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test
///
/// Every check bumps a 1-based index used in failure messages and golden
/// file names (`<name>_golden.<index>.<ext>`). Checks never panic; call
/// [`RegParams::cleanup`] at the end and assert on its result.
#[derive(Debug)]
pub struct RegParams {
    /// Test name without the `_reg` suffix
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a test, reading the mode from the environment.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Start a test in an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("======== {}_reg ({:?}) ========", test_name, mode);
        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Count a check and record `detail` if it failed.
    fn record(&mut self, passed: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !passed {
            let msg = format!("{}_reg #{}: {}", self.test_name, self.index, detail());
            eprintln!("{}", msg);
            self.failures.push(msg);
        }
        passed
    }

    /// Check `|expected - actual| <= delta`. NaN on either side fails.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!("expected {expected}, got {actual} (diff {diff} > delta {delta})")
        })
    }

    /// Check that two images have the same size, depth and pixels.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        let mismatch = if !expected.sizes_equal(actual) {
            Some(format!(
                "pix shape {:?}/{} bpp vs {:?}/{} bpp",
                expected.dimensions(),
                expected.depth().bits(),
                actual.dimensions(),
                actual.depth().bits()
            ))
        } else {
            first_pixel_mismatch(expected, actual).map(|(x, y)| format!("pix differ at ({x}, {y})"))
        };
        self.record(mismatch.is_none(), || mismatch.unwrap_or_default())
    }

    /// Check that two float images have the same size and every pixel
    /// pair is within `delta`.
    pub fn compare_dpix(&mut self, expected: &DPix, actual: &DPix, delta: f64) -> bool {
        match expected.max_abs_diff(actual) {
            Ok(diff) => self.record(diff <= delta, || {
                format!("dpix max diff {diff} > delta {delta}")
            }),
            Err(e) => self.record(false, || format!("dpix {e}")),
        }
    }

    /// Write `data` to the regout directory and check it against its
    /// golden file according to the mode.
    ///
    /// In compare mode a missing golden is reported on stderr and passes.
    ///
    /// # Errors
    ///
    /// Returns a [`TestError`] if the output or golden file cannot be
    /// written or read.
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        let out_dir = PathBuf::from(regout_dir());
        create_dir(&out_dir)?;
        let next = self.index + 1;
        let local = out_dir.join(format!("{}.{:02}.{}", self.test_name, next, ext));
        fs::write(&local, data)?;

        let golden = PathBuf::from(golden_dir())
            .join(format!("{}_golden.{:02}.{}", self.test_name, next, ext));

        match self.mode {
            RegTestMode::Generate => {
                create_dir(Path::new(&golden_dir()))?;
                fs::write(&golden, data)?;
                eprintln!("generated {}", golden.display());
                self.record(true, String::new);
            }
            RegTestMode::Compare if golden.exists() => {
                let same = fs::read(&golden)? == data;
                self.record(same, || {
                    format!("{} differs from {}", local.display(), golden.display())
                });
            }
            RegTestMode::Compare => {
                eprintln!("no golden for check #{}: {}", next, golden.display());
                self.record(true, String::new);
            }
            RegTestMode::Display => {
                self.record(true, String::new);
            }
        }
        Ok(())
    }

    /// True while no check has failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        let ok = self.is_success();
        if ok {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        ok
    }
}

fn first_pixel_mismatch(a: &Pix, b: &Pix) -> Option<(u32, u32)> {
    (0..a.height())
        .flat_map(|y| (0..a.width()).map(move |x| (x, y)))
        .find(|&(x, y)| a.get_pixel_unchecked(x, y) != b.get_pixel_unchecked(x, y))
}

fn create_dir(path: &Path) -> TestResult<()> {
    fs::create_dir_all(path).map_err(|e| TestError::DirectoryCreate {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
