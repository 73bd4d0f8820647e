//! Summary period representation
//!
//! A period names a window rule relative to a reference date. The rule itself
//! lives in [`crate::reports::summary`]; this type only carries the choice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window used for a time-based expense summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPeriod {
    /// Records dated exactly on the reference date
    Daily,
    /// Records from the reference date back through the seven days before it
    Weekly,
    /// Records sharing the reference date's calendar month
    Monthly,
}

impl SummaryPeriod {
    /// All periods, in menu order
    pub const ALL: [SummaryPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Lowercase name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

impl FromStr for SummaryPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid period '{}': expected daily, weekly or monthly",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
