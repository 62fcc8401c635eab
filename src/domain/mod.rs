//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Member/plan/payment records and the due-date replay engine

pub mod foundation;
pub mod membership;
