//! Member status state machine.
//!
//! A gym member is either active or inactive. The status is informational
//! to the replay engine (the engine derives everything from the event
//! history), but the audit views display it and the store enforces it.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Current standing of a gym member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Membership is current; dues are being collected.
    Active,

    /// Member lapsed or left. A reactivation event brings them back.
    Inactive,
}

impl MemberStatus {
    /// Returns true if the member is currently active.
    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }
}

impl StateMachine for MemberStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MemberStatus::*;
        matches!(
            (self, target),
            (Active, Inactive)   // lapse / deactivation
                | (Inactive, Active) // reactivation
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MemberStatus::*;
        match self {
            Active => vec![Inactive],
            Inactive => vec![Active],
        }
    }
}
