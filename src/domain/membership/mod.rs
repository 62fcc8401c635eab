//! Membership domain module.
//!
//! Records describing a member's payment schedule and the replay engine
//! that audits it.
//!
//! # Module Structure
//!
//! - `member` - Member snapshot record (the anchor date lives here)
//! - `status` - MemberStatus state machine
//! - `plan` - Membership plan with duration normalization
//! - `payment` - Payment events and their canonical replay order
//! - `history` - Lifecycle events (reactivations reset the anchor)
//! - `cycle` - CycleState, the two-state core of the replay
//! - `replay` - DueDateReplayEngine

mod cycle;
mod errors;
mod history;
mod member;
mod payment;
mod plan;
mod replay;
mod status;

pub use cycle::CycleState;
pub use errors::MembershipError;
pub use history::{HistoryEvent, MemberChangeType};
pub use member::MemberRecord;
pub use payment::PaymentEvent;
pub use plan::{Plan, PlanRecord};
pub use replay::{DueDateReplayEngine, ReplayNote, ReplayOutcome};
pub use status::MemberStatus;
