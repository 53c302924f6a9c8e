use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unreachable: {0}")]
    Unreachable(String),
}

impl AlgorithmError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, AlgorithmError>;
