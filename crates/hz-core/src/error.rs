use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}

impl CoreError {
    /// Name of the quantity that failed the check.
    pub fn what(&self) -> &'static str {
        match self {
            Self::NonFinite { what, .. } | Self::NonPositive { what, .. } => what,
        }
    }

    /// The offending value.
    pub fn value(&self) -> f64 {
        match self {
            Self::NonFinite { value, .. } | Self::NonPositive { value, .. } => *value,
        }
    }
}
