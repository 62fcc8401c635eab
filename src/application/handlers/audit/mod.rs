//! Due-date audit handlers.
//!
//! Two independent consumers of the replay engine:
//!
//! - `audit_table` - flat per-member verification table
//! - `monthly_overview` - expected due dates grouped by month
//!
//! Both run the same engine on the same snapshots, so their expected due
//! dates must agree exactly. That consistency is covered by the
//! integration suite.

mod audit_table;
mod monthly_overview;

pub use audit_table::{AuditRow, BuildAuditTableHandler, BuildAuditTableQuery, BuildAuditTableResult};
pub use monthly_overview::{
    MonthlyDueEntry, MonthlyDueGroup, MonthlyOverviewHandler, MonthlyOverviewQuery,
    MonthlyOverviewResult,
};
