use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Product id '{0}' already exists")]
    DuplicateProduct(String),
    #[error("Unknown product id '{0}'")]
    UnknownProduct(String),
    #[error("Order '{0}' not found")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl<T> From<std::sync::PoisonError<T>> for DomainError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DomainError::Internal(e.to_string())
    }
}
