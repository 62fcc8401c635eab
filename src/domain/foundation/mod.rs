//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the Gym Dues domain.

mod calendar_date;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use calendar_date::CalendarDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MemberId, PaymentId, PlanId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
