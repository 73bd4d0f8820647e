//! Audit entry data structures
//!
//! Defines the events the expense log records and the line format written
//! for each one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ExpenseRecord;

/// Kinds of events written to the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    /// An expense was appended to the store
    ExpenseAdded,
}

impl std::fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditEvent::ExpenseAdded => write!(f, "ADD"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: AuditEvent,

    /// One-line human-readable description
    pub summary: String,

    /// JSON form of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly added expense
    pub fn expense_added(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            event: AuditEvent::ExpenseAdded,
            summary: record.to_string(),
            record: serde_json::to_value(record).ok(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.summary
        )
    }
}
