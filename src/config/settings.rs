//! User settings for the expense log
//!
//! Manages display preferences and the window rule switches.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::reports::WindowOptions;

/// User settings for the expense log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used for all displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used for input and display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// When set, the monthly summary only counts records from the
    /// reference date's year
    #[serde(default)]
    pub monthly_same_year: bool,

    /// Width of the terminal bar chart, in cells
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Whether added expenses are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_chart_width() -> usize {
    40
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            monthly_same_year: false,
            chart_width: default_chart_width(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Window options derived from these settings
    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            monthly_same_year: self.monthly_same_year,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
