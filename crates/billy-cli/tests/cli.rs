use assert_cmd::Command;
use predicates::prelude::*;

const RECEIPT: &str = "\
JOE'S DINER
2 Cheeseburger $9.50
1 Steak Dinner $1,250.00
Tax: $3.12
";

#[test]
fn parse_prints_text_table() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "-"])
        .write_stdin(RECEIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheeseburger"))
        .stdout(predicate::str::contains("$9.50"))
        .stdout(predicate::str::contains("$1250.00"))
        .stdout(predicate::str::contains("Total: --"));
}

#[test]
fn parse_emits_json() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "-", "--format", "json", "--total", "28.00"])
        .write_stdin(RECEIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description\": \"Cheeseburger\""))
        .stdout(predicate::str::contains("\"total\": \"28.00\""));
}

#[test]
fn parse_reports_empty_extraction() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "-"])
        .write_stdin("nothing that looks like a receipt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No receipt items found."))
        .stderr(predicate::str::contains("No items detected"));
}

#[test]
fn parse_rejects_negative_total() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "-", "--total=-5.00"])
        .write_stdin(RECEIPT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid total amount"));
}

#[test]
fn parse_accepts_currency_style_total() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "-", "--total", "$1,250.00"])
        .write_stdin(RECEIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $1250.00"));
}

#[test]
fn parse_rejects_missing_file() {
    Command::cargo_bin("billy")
        .unwrap()
        .args(["parse", "/no/such/receipt.txt"])
        .assert()
        .failure();
}
