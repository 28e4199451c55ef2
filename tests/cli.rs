use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_prints_sample_report_in_every_format() {
    Command::cargo_bin("katas")
        .unwrap()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Expense Report: \d{4}-\d{2}-\d{2}\n").unwrap())
        .stdout(predicate::str::contains("Dinner\t6000\tX\n"))
        .stdout(predicate::str::contains("Breakfast\t800\t \n"))
        .stdout(predicate::str::contains("Meal Expenses: 9800\nTotal Expenses: 24800\n"))
        .stdout(predicate::str::contains(
            "<tr><td>Car Rental</td><td>15000</td><td> </td></tr>",
        ))
        .stdout(predicate::str::contains("<p>Total Expenses: 24800</p>"))
        .stdout(predicate::str::contains(
            "{\"type\": \"Lunch\", \"amount\": 3000, \"overLimit\": \"X\"}",
        ))
        .stdout(predicate::str::ends_with("\"totalExpenses\": 24800\n}"));
}

#[test]
fn test_debug_logs_stay_off_stdout() {
    Command::cargo_bin("katas")
        .unwrap()
        .env("RUST_LOG", "tdd_katas=debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered expense report").not())
        .stderr(predicate::str::contains("Rendered expense report"));
}
