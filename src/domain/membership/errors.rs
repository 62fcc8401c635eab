//! Membership-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Membership-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    /// Member was not found in the store.
    NotFound(MemberId),

    /// Plan duration is below the one-month minimum.
    InvalidPlanDuration { total_months: u32 },

    /// A record failed validation at the loading boundary.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error from the data source.
    Infrastructure(String),
}

impl MembershipError {
    pub fn not_found(id: MemberId) -> Self {
        MembershipError::NotFound(id)
    }

    pub fn invalid_plan_duration(total_months: u32) -> Self {
        MembershipError::InvalidPlanDuration { total_months }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MembershipError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        MembershipError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MembershipError::NotFound(_) => ErrorCode::MemberNotFound,
            MembershipError::InvalidPlanDuration { .. } => ErrorCode::OutOfRange,
            MembershipError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MembershipError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            MembershipError::NotFound(id) => format!("Member not found: {}", id),
            MembershipError::InvalidPlanDuration { total_months } => {
                format!("Plan duration must be at least 1 month, got {}", total_months)
            }
            MembershipError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MembershipError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    ///
    /// Retries belong to the data-fetching layer; the only retryable
    /// failure is the store being unreachable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MembershipError::Infrastructure(_))
    }
}

impl std::fmt::Display for MembershipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MembershipError {}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        MembershipError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for MembershipError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MemberNotFound => MembershipError::Infrastructure(err.to_string()),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => MembershipError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => MembershipError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_plan_duration_displays_months() {
        let err = MembershipError::invalid_plan_duration(0);
        assert_eq!(err.message(), "Plan duration must be at least 1 month, got 0");
        assert_eq!(err.code(), ErrorCode::OutOfRange);
    }

    #[test]
    fn not_found_carries_member_id() {
        let id = MemberId::new();
        let err = MembershipError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::MemberNotFound);
    }

    #[test]
    fn only_infrastructure_errors_are_retryable() {
        assert!(MembershipError::infrastructure("connection reset").is_retryable());
        assert!(!MembershipError::invalid_plan_duration(0).is_retryable());
        assert!(!MembershipError::validation("date", "bad").is_retryable());
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: MembershipError = ValidationError::empty_field("joining_date").into();
        match err {
            MembershipError::ValidationFailed { field, .. } => assert_eq!(field, "joining_date"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn domain_error_converts_by_code() {
        let err: MembershipError =
            DomainError::new(ErrorCode::DatabaseError, "connection refused").into();
        assert!(matches!(err, MembershipError::Infrastructure(_)));

        let err: MembershipError =
            DomainError::validation("payment_date", "unparsable").into();
        assert!(matches!(err, MembershipError::ValidationFailed { .. }));
    }
}
