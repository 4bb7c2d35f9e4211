use thiserror::Error;

/// Classification of a failed credential operation, independent of its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was missing or empty. The caller should re-prompt.
    Validation,
    /// Unknown user or wrong password. The two are deliberately indistinguishable.
    Unauthorized,
    /// The credential store failed.
    Storage,
    /// Anything else that is not the caller's fault.
    Internal,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    pub fn missing_credentials() -> Self {
        Self::Validation("missing credentials".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Repository(_) => ErrorKind::Storage,
            Self::Hashing(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}
