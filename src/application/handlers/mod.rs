//! Query handlers.

pub mod audit;

pub use audit::{
    AuditRow, BuildAuditTableHandler, BuildAuditTableQuery, BuildAuditTableResult,
    MonthlyDueEntry, MonthlyDueGroup, MonthlyOverviewHandler, MonthlyOverviewQuery,
    MonthlyOverviewResult,
};
