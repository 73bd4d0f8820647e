use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use expense_log::audit::AuditLogger;
use expense_log::cli::{
    handle_add, handle_top, parse_date_input, run_menu, write_chart, write_summary, ExpenseInput,
};
use expense_log::config::{ExpensePaths, Settings};
use expense_log::error::ExpenseError;
use expense_log::models::SummaryPeriod;
use expense_log::services::ExpenseService;
use expense_log::storage::CsvRecordStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense logger",
    long_about = "Record dated, categorized expenses and see daily, weekly and \
                  monthly totals, your top spending categories, and charts of \
                  where the money went. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add {
        /// Amount, e.g. 12.50
        amount: String,
        /// Category name
        category: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the total for a daily, weekly or monthly window
    Summary {
        /// daily, weekly or monthly
        period: SummaryPeriod,
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show categories ranked by total spending
    #[command(alias = "categories")]
    Top {
        /// Show top N categories only
        #[arg(short, long)]
        limit: Option<usize>,
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw the spending bar chart and distribution
    #[command(alias = "visualize")]
    Chart {
        /// Chart width in cells (defaults to the configured width)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Launch the interactive menu
    Menu,

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    // Initialize storage
    let store = CsvRecordStore::open(paths.expenses_file())?;
    let mut service = ExpenseService::new(store);
    if settings.audit_enabled {
        service = service.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let today = chrono::Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => {
            let input = ExpenseInput {
                amount,
                category,
                description,
                date,
            };
            handle_add(&mut service, &settings, &input, today, &mut stdout)?;
        }
        Some(Commands::Summary { period, date }) => {
            let reference = parse_date_input(date.as_deref(), &settings.date_format, today)
                .map_err(ExpenseError::from)?;
            write_summary(&service, &settings, period, reference, &mut stdout)?;
        }
        Some(Commands::Top { limit, output }) => {
            handle_top(&service, &settings, limit, output.as_deref(), &mut stdout)?;
        }
        Some(Commands::Chart { width }) => {
            let width = width.unwrap_or(settings.chart_width);
            write_chart(&service, &settings, width, &mut stdout)?;
        }
        Some(Commands::Log { count }) => {
            let logger = AuditLogger::new(paths.audit_log());
            if !logger.exists() {
                println!("No audit entries yet.");
            }
            for entry in logger.read_recent(count)? {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("Expense Log Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Monthly same year: {}", settings.monthly_same_year);
            println!("  Chart width:       {}", settings.chart_width);
            println!("  Audit enabled:     {}", settings.audit_enabled);
        }
        Some(Commands::Menu) | None => {
            let mut stdin = io::stdin().lock();
            let clock = || chrono::Local::now().date_naive();
            run_menu(&mut service, &settings, clock, &mut stdin, &mut stdout)?;
        }
    }

    Ok(())
}
