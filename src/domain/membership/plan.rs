//! Membership plan with duration normalization.
//!
//! The store's plan rows are loosely shaped: older rows carry only
//! `duration_months`, newer ones split it into `base_duration_months` plus
//! an optional `bonus_duration_months`. That normalization happens exactly
//! once, in [`Plan::from_record`], at the data-loading boundary. The rest
//! of the domain only ever sees a validated [`Plan`].

use crate::domain::foundation::{PlanId, ValidationError};
use serde::{Deserialize, Serialize};

/// A validated membership plan.
///
/// Invariant: `base_duration_months >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,

    /// Display name, as stored.
    pub name: String,

    /// Paid duration of one cycle, in months.
    base_duration_months: u32,

    /// Promotional bonus months appended to each cycle.
    bonus_duration_months: u32,
}

/// Raw plan row as the store returns it, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRecord {
    pub id: PlanId,
    pub name: String,
    pub duration_months: Option<u32>,
    pub base_duration_months: Option<u32>,
    pub bonus_duration_months: Option<u32>,
}

impl Plan {
    /// Creates a plan, enforcing the minimum one-month base duration.
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        base_duration_months: u32,
        bonus_duration_months: u32,
    ) -> Result<Self, ValidationError> {
        if base_duration_months < 1 {
            return Err(ValidationError::out_of_range(
                "base_duration_months",
                1,
                i32::MAX,
                base_duration_months as i32,
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            base_duration_months,
            bonus_duration_months,
        })
    }

    /// Normalizes a raw store row into a validated plan.
    ///
    /// `base_duration_months` falls back to the legacy `duration_months`
    /// column; `bonus_duration_months` defaults to zero. A row with neither
    /// duration column is rejected rather than guessed at.
    pub fn from_record(record: PlanRecord) -> Result<Self, ValidationError> {
        let base = record
            .base_duration_months
            .or(record.duration_months)
            .ok_or_else(|| ValidationError::empty_field("base_duration_months"))?;
        let bonus = record.bonus_duration_months.unwrap_or(0);
        Self::new(record.id, record.name, base, bonus)
    }

    /// Base duration of one cycle, in months.
    pub fn base_duration_months(&self) -> u32 {
        self.base_duration_months
    }

    /// Bonus months appended to each cycle.
    pub fn bonus_duration_months(&self) -> u32 {
        self.bonus_duration_months
    }

    /// Total cycle length: base plus bonus. Always at least 1.
    pub fn total_months(&self) -> u32 {
        self.base_duration_months + self.bonus_duration_months
    }
}
