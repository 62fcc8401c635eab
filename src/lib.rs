//! Gym Dues - Membership Due-Date Audit Engine
//!
//! This crate reconstructs what a member's next payment due date *should* be
//! by replaying their full payment and lifecycle history, so that the value
//! maintained by the database trigger can be audited against it.

pub mod application;
pub mod domain;
pub mod ports;
