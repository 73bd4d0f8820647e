//! Interactive text menu
//!
//! The seven-option loop shown when `expenses` runs without a subcommand.
//! Reads from any `BufRead` and writes to any `Write`; end of input exits
//! like option 7. `today` is asked for on every action, so a session left
//! open past midnight moves on to the new day.

use chrono::NaiveDate;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

use super::expense::{build_record, ExpenseInput};
use super::report::{write_chart, write_summary, write_top};
use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::SummaryPeriod;
use crate::services::ExpenseService;
use crate::storage::RecordStore;

const MENU: &str = "\
Expense Tracker Menu:
1. Add Expense
2. Daily Summary
3. Weekly Summary
4. Monthly Summary
5. View Top Categories
6. Visualize Expenses
7. Exit";

/// Print `label`, then read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> ExpenseResult<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu until the user exits or input ends
pub fn run_menu<S: RecordStore, C: Fn() -> NaiveDate, R: BufRead, W: Write>(
    service: &mut ExpenseService<S>,
    settings: &Settings,
    today: C,
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<()> {
    loop {
        writeln!(out, "\n{}", MENU)?;
        let Some(choice) = prompt(input, out, "Enter your choice: ")? else {
            writeln!(out)?;
            break;
        };

        match choice.as_str() {
            "1" => {
                if !add_from_prompts(service, settings, &today, input, out)? {
                    break;
                }
            }
            "2" => write_summary(service, settings, SummaryPeriod::Daily, today(), out)?,
            "3" => write_summary(service, settings, SummaryPeriod::Weekly, today(), out)?,
            "4" => write_summary(service, settings, SummaryPeriod::Monthly, today(), out)?,
            "5" => write_top(service, settings, None, out)?,
            "6" => {
                write_top(service, settings, None, out)?;
                writeln!(out)?;
                write_chart(service, settings, settings.chart_width, out)?;
            }
            "7" => {
                writeln!(out, "Exiting... Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

/// Prompt for each field of a new expense; `false` if input ended midway
fn add_from_prompts<S: RecordStore, C: Fn() -> NaiveDate, R: BufRead, W: Write>(
    service: &mut ExpenseService<S>,
    settings: &Settings,
    today: &C,
    input: &mut R,
    out: &mut W,
) -> ExpenseResult<bool> {
    let mut example = String::new();
    if write!(example, "{}", today().format(&settings.date_format)).is_err() {
        example = settings.date_format.clone();
    }
    let date_label = format!("Enter date (e.g. {}) or press Enter for today: ", example);
    let fields = [
        "Enter amount: ",
        "Enter category (e.g., Food, Travel, Bills): ",
        "Enter description: ",
        date_label.as_str(),
    ];

    let mut answers = Vec::with_capacity(fields.len());
    for label in fields {
        match prompt(input, out, label)? {
            Some(answer) => answers.push(answer),
            None => {
                writeln!(out)?;
                return Ok(false);
            }
        }
    }

    let mut answers = answers.into_iter();
    let expense = ExpenseInput {
        amount: answers.next().unwrap_or_default(),
        category: answers.next().unwrap_or_default(),
        description: answers.next().unwrap_or_default(),
        date: answers.next(),
    };

    match build_record(&expense, &settings.date_format, today()) {
        Ok(record) => {
            service.add_expense(record)?;
            writeln!(out, "Expense added successfully.")?;
        }
        Err(errors) => {
            for error in errors {
                writeln!(out, "{}", error)?;
            }
            writeln!(out, "Expense not saved.")?;
        }
    }

    Ok(true)
}
