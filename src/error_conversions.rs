//! Error conversion glue between the domain value objects and the service
//! layer.
//!
//! The domain layer must not depend on service error types, so the
//! conversion lives here instead of next to [`TypeConstraintError`].

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_becomes_service_error() {
        let err = ServiceError::from(TypeConstraintError::EmptyString);
        assert!(matches!(err, ServiceError::TypeConstraint(msg) if msg == "value cannot be empty"));
    }

    #[test]
    fn invalid_date_keeps_its_message() {
        let err = ServiceError::from(TypeConstraintError::InvalidDate);
        assert!(matches!(err, ServiceError::TypeConstraint(msg) if msg == "invalid date"));
    }
}
