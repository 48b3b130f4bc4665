//! Test harness errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// A synthetic input could not be built
    #[error("cannot build test image '{name}': {message}")]
    ImageBuild { name: String, message: String },

    #[error("cannot create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
