//! Business operations built on top of the repository traits.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customers;
pub mod seed;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied an argument outside the accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
