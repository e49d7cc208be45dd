use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("thread count must be at least 1")]
    ZeroThreads,

    #[error("invalid sample range [{lo}, {hi}): bounds must be finite with lo < hi")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    pub(crate) fn check_range((lo, hi): (f64, f64)) -> Result<(), HarnessError> {
        if lo.is_finite() && hi.is_finite() && lo < hi {
            Ok(())
        } else {
            Err(HarnessError::InvalidRange { lo, hi })
        }
    }
}
