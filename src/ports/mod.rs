//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuditReader` - Read side of the member store, scoped to what the
//!   due-date audit needs: one snapshot per member.

mod audit_reader;

pub use audit_reader::{AuditReader, MemberAuditSnapshot};
