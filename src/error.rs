//! Error taxonomy shared by every component

use swarmlab_functions::WfgError;
use thiserror::Error;

/// Errors that can occur while sampling, selecting, transforming or evaluating
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwarmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Malformed domain string: {0}")]
    DomainParse(String),
}

pub type SwarmResult<T> = Result<T, SwarmError>;

impl From<WfgError> for SwarmError {
    fn from(err: WfgError) -> Self {
        SwarmError::Domain(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wfg_errors_become_domain_errors() {
        let err: SwarmError = WfgError::DimensionMismatch { expected: 24, actual: 3 }.into();
        assert_eq!(
            err,
            SwarmError::Domain("expected 24 decision variables, got 3".to_string())
        );
    }

    #[test]
    fn test_display() {
        let err = SwarmError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "Index 4 out of range for length 3");
    }
}
