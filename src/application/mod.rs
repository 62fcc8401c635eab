//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. The audit is read-only, so only query handlers exist.

pub mod handlers;

pub use handlers::{
    AuditRow, BuildAuditTableHandler, BuildAuditTableQuery, BuildAuditTableResult,
    MonthlyDueEntry, MonthlyDueGroup, MonthlyOverviewHandler, MonthlyOverviewQuery,
    MonthlyOverviewResult,
};
