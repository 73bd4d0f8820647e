use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_LOG_DATA_DIR", data_dir.path());
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["add", amount, category, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Added expense:"));
}

fn seed(data_dir: &TempDir) {
    add(data_dir, "100", "Food", "2024-03-15");
    add(data_dir, "50", "Travel", "2024-03-15");
    add(data_dir, "30", "Food", "2024-03-10");
    add(data_dir, "20", "Bills", "2023-03-02");
}

#[test]
fn add_writes_csv_with_single_header() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    let contents = std::fs::read_to_string(data_dir.path().join("expenses.csv")).unwrap();
    assert_eq!(contents.matches("Date,Amount,Category,Description").count(), 1);
    assert_eq!(contents.lines().count(), 5);
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn summary_windows() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    expenses(&data_dir)
        .args(["summary", "daily", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Expense: ₹150.00"));

    expenses(&data_dir)
        .args(["summary", "weekly", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly Expense: ₹180.00"));

    // Month-only match counts the 2023 record too
    expenses(&data_dir)
        .args(["summary", "monthly", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expense: ₹200.00"));
}

#[test]
fn top_ranks_and_exports() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    expenses(&data_dir)
        .arg("top")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Spending Categories"))
        .stdout(predicate::str::contains("Total: ₹200.00"));

    let export = data_dir.path().join("top.csv");
    expenses(&data_dir)
        .args(["top", "--limit", "2", "-o"])
        .arg(&export)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&export).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "1,Food,130.00,2,65.00");
    assert_eq!(lines[2], "2,Travel,50.00,1,25.00");
}

#[test]
fn chart_draws_both_views() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    expenses(&data_dir)
        .args(["chart", "--width", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses by Category"))
        .stdout(predicate::str::contains("Expense Distribution"))
        .stdout(predicate::str::contains("65.0%"));
}

#[test]
fn invalid_add_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: 'abc'"));

    expenses(&data_dir)
        .args(["summary", "daily", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹0.00 (0 expenses"));
}

#[test]
fn malformed_rows_are_skipped_with_warning() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("expenses.csv"),
        "Date,Amount,Category,Description\n\
         2024-03-15,10,Food,\n\
         not-a-date,5,Food,\n\
         garbage\n\
         2024-03-15,20,Travel,\n",
    )
    .unwrap();

    expenses(&data_dir)
        .args(["summary", "daily", "--date", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: skipped row 2"))
        .stdout(predicate::str::contains("Warning: skipped row 3: Invalid date: 'garbage'"))
        .stdout(predicate::str::contains("Daily Expense: ₹30.00"));

    expenses(&data_dir)
        .arg("top")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: ₹30.00"));
}

#[test]
fn menu_via_stdin() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    expenses(&data_dir)
        .write_stdin("8\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Top Spending Categories"))
        .stdout(predicate::str::contains("Exiting... Goodbye!"));
}

#[test]
fn add_is_audited() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "12.5", "Books", "2024-03-01");

    expenses(&data_dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD 2024-03-01 Books ₹12.50"));
}
