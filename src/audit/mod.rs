//! Audit logging for the expense log
//!
//! Records every added expense in an append-only JSON Lines file.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_log::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::expense_added(&record))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
