//! DueDateReplayEngine - reconstructs the expected next payment due date.
//!
//! The store's trigger advances a member's next due date as payments land.
//! For auditing, this engine independently replays the full payment history
//! against the same rules and reports what the due date *should* be:
//!
//! 1. Payments replay in canonical order (`payment_date`, then `created_at`).
//! 2. A reactivation whose date coincides with a payment, and which carries
//!    a new joining date, moves the cycle anchor as of that payment.
//! 3. The first payment (or any payment after the anchor moved past the
//!    last due date) advances from the anchor; later payments chain from
//!    the previous due date.
//! 4. The result's day-of-month is clamped to
//!    `min(joining day, last day of the target month)`.
//!
//! The engine is pure: no I/O, no shared state, inputs never mutated.
//! Identical inputs always produce identical outcomes, so it is safe to
//! run once per member across many tasks with no coordination.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::CalendarDate;

use super::{CycleState, HistoryEvent, MembershipError, PaymentEvent};

/// Human-readable justification attached to a replay result.
///
/// `Display` yields the exact strings the audit screens render, so the two
/// consumers stay byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayNote {
    /// Member has no payments; no due date is defined.
    NoPayments,

    /// Exactly one payment, no reactivations.
    SinglePayment,

    /// Multiple payments, no reactivations.
    Payments(usize),

    /// At least one reactivation appears in the member's history.
    Reactivated(usize),

    /// Defensive fallback: payments existed but no due date was
    /// established. Reaching this indicates an internal-consistency bug
    /// and callers log it loudly.
    CalculationFailed,
}

impl fmt::Display for ReplayNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayNote::NoPayments => write!(f, "No payments"),
            ReplayNote::SinglePayment => write!(f, "Single payment"),
            ReplayNote::Payments(n) => write!(f, "{} payments", n),
            ReplayNote::Reactivated(k) => write!(f, "Reactivated {}x", k),
            ReplayNote::CalculationFailed => write!(f, "Calculation failed"),
        }
    }
}

/// Result of replaying a member's payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    /// The due date the trigger should have recorded, or `None` when no
    /// payment history exists.
    pub expected_next_due_date: Option<CalendarDate>,

    /// Why the result is what it is.
    pub note: ReplayNote,
}

/// Pure replay of the due-date advancement rules.
pub struct DueDateReplayEngine;

impl DueDateReplayEngine {
    /// Replays a member's payment history and returns the expected next
    /// due date with a justification note.
    ///
    /// * `joining_date` - the member's original anchor date.
    /// * `total_months` - the plan's full cycle length (base plus bonus);
    ///   must be at least 1, rejected otherwise.
    /// * `payments` - in any order; a sorted copy is replayed.
    /// * `history` - full lifecycle history; only `member_reactivated`
    ///   rows participate.
    pub fn replay(
        joining_date: CalendarDate,
        total_months: u32,
        payments: &[PaymentEvent],
        history: &[HistoryEvent],
    ) -> Result<ReplayOutcome, MembershipError> {
        if total_months < 1 {
            return Err(MembershipError::invalid_plan_duration(total_months));
        }

        // The note counts every reactivation in the history, matched to a
        // payment or not.
        let reactivation_count = history.iter().filter(|e| e.is_reactivation()).count();

        if payments.is_empty() {
            return Ok(ReplayOutcome {
                expected_next_due_date: None,
                note: ReplayNote::NoPayments,
            });
        }

        // Anchor resets keyed by event date. Same-date duplicates resolve
        // last-write-wins in input order, so a later row with a null
        // new_joining_date shadows an earlier non-null one.
        let mut anchor_resets: HashMap<CalendarDate, Option<CalendarDate>> = HashMap::new();
        for event in history.iter().filter(|e| e.is_reactivation()) {
            anchor_resets.insert(event.occurred_on, event.new_joining_date);
        }

        let mut ordered: Vec<&PaymentEvent> = payments.iter().collect();
        ordered.sort_by(|a, b| a.replay_order(b));

        let mut current_joining = joining_date;
        let mut cycle = CycleState::Uninitialized;

        for payment in ordered {
            if let Some(Some(new_joining)) = anchor_resets.get(&payment.payment_date) {
                current_joining = *new_joining;
            }

            let joining_day = current_joining.day();
            let base = cycle.base(current_joining);
            let next_due = base.add_months_anchored(total_months, joining_day);

            debug!(
                payment_date = %payment.payment_date,
                base = %base,
                next_due = %next_due,
                "replayed payment"
            );

            cycle = cycle.advance(next_due);
        }

        let note = if reactivation_count > 0 {
            ReplayNote::Reactivated(reactivation_count)
        } else if payments.len() == 1 {
            ReplayNote::SinglePayment
        } else {
            ReplayNote::Payments(payments.len())
        };

        // Unreachable given the empty-payments guard, but the audit views
        // must still get a renderable row if it ever fires.
        match cycle.due_date() {
            Some(due) => Ok(ReplayOutcome {
                expected_next_due_date: Some(due),
                note,
            }),
            None => Ok(ReplayOutcome {
                expected_next_due_date: None,
                note: ReplayNote::CalculationFailed,
            }),
        }
    }
}
