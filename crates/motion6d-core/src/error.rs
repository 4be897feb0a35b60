use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("no samples provided")]
    Empty,
    #[error("series `{series}` has {actual} samples, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("time is not strictly increasing at sample {index}: {previous} -> {current}")]
    NonIncreasingTime {
        index: usize,
        previous: f64,
        current: f64,
    },
}

pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Check that `series` has exactly `expected` samples.
pub(crate) fn check_len(series: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SynthesisError::LengthMismatch {
            series,
            expected,
            actual,
        });
    }
    Ok(())
}
