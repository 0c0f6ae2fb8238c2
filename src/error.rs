use thiserror::Error;

/// Failures reported by an inverter client.
///
/// `Communication` and `InvalidValue` are the two kinds the setup probe
/// treats as "this model does not expose the setting". Anything else is
/// carried in `Other` and is never swallowed.
#[derive(Debug, Error)]
pub enum InverterError {
    #[error("inverter communication failed: {0}")]
    Communication(String),
    #[error("invalid or unsupported value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InverterError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Communication(_) | Self::InvalidValue(_))
    }

    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication(_))
    }
}
