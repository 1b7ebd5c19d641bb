//! Domain error types.

/// Top-level error type for investsim.
#[derive(Debug, thiserror::Error)]
pub enum InvestsimError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid commission schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("invalid simulation parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("invalid price series: {reason}")]
    InvalidSeries { reason: String },

    #[error("invalid purchase: {reason}")]
    InvalidPurchase { reason: String },

    /// Pending cash survived past the final scheduled purchase. This is a
    /// timing-policy bug, not a recoverable input error.
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },

    #[error("price data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&InvestsimError> for std::process::ExitCode {
    fn from(err: &InvestsimError) -> Self {
        let code: u8 = match err {
            InvestsimError::Io(_) => 1,
            InvestsimError::ConfigParse { .. }
            | InvestsimError::ConfigMissing { .. }
            | InvestsimError::ConfigInvalid { .. }
            | InvestsimError::InvalidSchedule { .. }
            | InvestsimError::InvalidParameter { .. } => 2,
            InvestsimError::Data { .. } | InvestsimError::InvalidSeries { .. } => 3,
            InvestsimError::InvalidPurchase { .. }
            | InvestsimError::InvariantViolation { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
