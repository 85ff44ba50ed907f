use thiserror::Error;

/// Errors raised by the energy network model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the input field that was rejected
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::InvalidInput { field, .. } => field,
        }
    }
}
