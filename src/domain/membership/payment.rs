//! Payment events and their canonical replay order.

use crate::domain::foundation::{CalendarDate, PaymentId, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A recorded membership payment.
///
/// Payments arrive in no particular order; the replay engine sorts a copy
/// by `payment_date`, breaking ties with `created_at` (the instant the row
/// was written). Two same-day payments therefore replay in the order they
/// were recorded, not the order the store happened to return them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEvent {
    /// Payment ID.
    pub id: PaymentId,

    /// Calendar date the payment covers.
    pub payment_date: CalendarDate,

    /// Instant the payment row was created. Tie-break key only.
    pub created_at: Timestamp,
}

impl PaymentEvent {
    /// Canonical replay ordering: `payment_date`, then `created_at`.
    pub fn replay_order(&self, other: &PaymentEvent) -> Ordering {
        self.payment_date
            .cmp(&other.payment_date)
            .then(self.created_at.cmp(&other.created_at))
    }
}
