//! Error conversion glue between the layered error types.
//!
//! The domain layer must not depend on repository/service error types, so
//! the conversions live here instead of next to `TypeConstraintError`.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
