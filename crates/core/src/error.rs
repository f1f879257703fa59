use crate::store::StoreError;

/// Domain errors raised by the services.
///
/// Variants carry fixed, user-facing messages. Mapping to transport status
/// codes is the job of the boundary layer, not of this type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Company id not found")]
    CompanyNotFound,

    #[error("Employee id not found")]
    EmployeeNotFound,

    #[error("Employee must be 18-65 years old")]
    EmployeeCreate,

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A create named an id that is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err)
    }
}

/// Convenience alias for service return values.
pub type CoreResult<T> = Result<T, CoreError>;
