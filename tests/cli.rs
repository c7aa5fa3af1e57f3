use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("MONTHLY_LEDGER_DATA_DIR", dir.path());
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    ledger(&dir).arg("init").assert().success();
    dir
}

/// Add a transaction and return its short ID from the output
fn add(dir: &TempDir, title: &str, amount: &str, category: &str, date: &str) -> String {
    let output = ledger(dir)
        .args(["transaction", "add", title, amount, "-c", category, "-d", date])
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:").map(|id| id.trim().to_string()))
        .unwrap()
}

#[test]
fn test_commands_require_init() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ledger init"));
}

#[test]
fn test_init_seeds_default_categories() {
    let dir = initialized();

    ledger(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alimentação"))
        .stdout(predicate::str::contains("Educação"));

    // Running init again keeps what is there
    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default categories").not());
}

#[test]
fn test_add_rejects_invalid_input() {
    let dir = initialized();

    ledger(&dir)
        .args(["transaction", "add", "Um título muito longo demais", "10", "-c", "Outros"])
        .assert()
        .failure();

    ledger(&dir)
        .args(["transaction", "add", "Luz", "10", "-c", "Inexistente", "-d", "2025-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    ledger(&dir)
        .args(["transaction", "add", "Luz", "abc", "-c", "Moradia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_list_follows_selected_period() {
    let dir = initialized();
    add(&dir, "Aluguel", "1500", "Moradia", "2025-01-05");
    add(&dir, "Mercado", "420,50", "Alimentação", "2025-02-10");

    ledger(&dir).args(["period", "set", "2025-01"]).assert().success();

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Janeiro 2025"))
        .stdout(predicate::str::contains("Aluguel"))
        .stdout(predicate::str::contains("Mercado").not());

    ledger(&dir)
        .args(["period", "set", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fevereiro 2025"));

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 420,50"));

    ledger(&dir)
        .args(["period", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* 2025-02"))
        .stdout(predicate::str::contains("2025-01"));
}

#[test]
fn test_sort_cycles_through_states() {
    let dir = initialized();
    add(&dir, "Luz", "90", "Moradia", "2025-01-05");
    ledger(&dir).args(["period", "set", "2025-01"]).assert().success();

    ledger(&dir)
        .args(["transaction", "sort", "amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by amount (asc)"));

    ledger(&dir)
        .args(["transaction", "sort", "amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by amount (desc)"));

    ledger(&dir)
        .args(["transaction", "sort", "amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsorted"));

    ledger(&dir)
        .args(["transaction", "sort", "payee"])
        .assert()
        .failure();
}

#[test]
fn test_bulk_delete_needs_force() {
    let dir = initialized();
    add(&dir, "Luz", "90", "Moradia", "2025-01-05");
    add(&dir, "Água", "60", "Moradia", "2025-01-06");
    ledger(&dir).args(["period", "set", "2025-01"]).assert().success();

    ledger(&dir)
        .args(["transaction", "select", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 transaction(s) selected"));

    ledger(&dir)
        .args(["transaction", "delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete 2 transaction(s)?"))
        .stdout(predicate::str::contains("--force"));

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 transaction(s)"));

    ledger(&dir)
        .args(["transaction", "delete", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 transaction(s)"));

    ledger(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn test_edit_selected_transaction() {
    let dir = initialized();
    let id = add(&dir, "Luz", "90", "Moradia", "2025-01-05");
    ledger(&dir).args(["period", "set", "2025-01"]).assert().success();

    // Nothing selected yet
    ledger(&dir)
        .args(["transaction", "edit", "--amount", "95", "--force"])
        .assert()
        .failure();

    ledger(&dir)
        .args(["transaction", "select", &id])
        .assert()
        .success();

    ledger(&dir)
        .args(["transaction", "edit", "--amount", "95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save changes to 'Luz'?"));

    ledger(&dir)
        .args(["transaction", "edit", "--amount", "95", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 95,00"));

    ledger(&dir)
        .args(["transaction", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 95,00"));
}

#[test]
fn test_category_delete_in_use() {
    let dir = initialized();
    add(&dir, "Luz", "90", "Moradia", "2025-01-05");

    ledger(&dir)
        .args(["category", "add", "  Pets  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Pets"));

    ledger(&dir)
        .args(["category", "add", "Pets"])
        .assert()
        .failure();

    // Unused categories go without asking
    ledger(&dir)
        .args(["category", "delete", "Pets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category: Pets"));

    ledger(&dir)
        .args(["category", "delete", "Moradia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("used by 1 transaction(s)"));

    ledger(&dir)
        .args(["category", "delete", "Moradia", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category: Moradia"));

    // The transaction keeps its category name
    ledger(&dir)
        .args(["transaction", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moradia"));
}

#[test]
fn test_summary_balance() {
    let dir = initialized();
    add(&dir, "Aluguel", "500", "Moradia", "2025-03-01");
    add(&dir, "Mercado", "150", "Alimentação", "2025-03-15");

    ledger(&dir)
        .args(["income", "set", "1000", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1000,00"));

    ledger(&dir)
        .args(["report", "summary", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Março 2025"))
        .stdout(predicate::str::contains("R$ 650,00"))
        .stdout(predicate::str::contains("R$ 350,00"));

    // Saving again replaces the figure for the period
    ledger(&dir)
        .args(["income", "set", "800", "--period", "2025-03"])
        .assert()
        .success();

    ledger(&dir)
        .args(["income", "show", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 800,00"));
}

#[test]
fn test_trend_window() {
    let dir = initialized();

    ledger(&dir)
        .args(["report", "trend", "--months", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 months)"));

    // The window is remembered
    ledger(&dir)
        .args(["report", "trend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 months)"));

    ledger(&dir)
        .args(["report", "trend", "--months", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("3, 6 or 12"));
}

#[test]
fn test_category_breakdown_for_period() {
    let dir = initialized();
    add(&dir, "Aluguel", "300", "Moradia", "2025-04-01");
    add(&dir, "Mercado", "100", "Alimentação", "2025-04-02");

    ledger(&dir)
        .args(["report", "categories", "--period", "2025-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75%"))
        .stdout(predicate::str::contains("25%"));

    ledger(&dir)
        .args(["report", "categories", "--period", "2025-04", "--only", "Moradia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains("Showing only: Moradia"));
}

#[test]
fn test_config_changes_locale() {
    let dir = initialized();

    ledger(&dir)
        .args(["config", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale:         en"));

    ledger(&dir)
        .args(["period", "set", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"));
}

#[test]
fn test_amounts_with_thousands_grouping() {
    let dir = initialized();
    add(&dir, "Aluguel", "R$ 1.500", "Moradia", "2025-05-01");

    ledger(&dir)
        .args(["transaction", "list", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1500,00"));

    ledger(&dir)
        .args(["transaction", "add", "Luz", "10,999", "-c", "Moradia", "-d", "2025-05-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 10999,00"));

    ledger(&dir)
        .args(["transaction", "add", "Luz", "10,9999", "-c", "Moradia", "-d", "2025-05-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    ledger(&dir)
        .args(["income", "set", "90000000000000000", "--period", "2025-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed"));
}

#[test]
fn test_config_rejects_bad_date_format() {
    let dir = initialized();
    add(&dir, "Luz", "90", "Moradia", "2025-01-05");

    ledger(&dir)
        .args(["config", "--date-format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    ledger(&dir)
        .args(["transaction", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("05/01/2025"));
}

#[test]
fn test_audit_lists_recent_changes() {
    let dir = initialized();
    add(&dir, "Luz", "90", "Moradia", "2025-01-05");
    ledger(&dir).args(["category", "add", "Pets"]).assert().success();

    ledger(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Transaction"))
        .stdout(predicate::str::contains("(Pets)"));

    ledger(&dir)
        .args(["audit", "--entity", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction").not());

    ledger(&dir)
        .args(["audit", "--entity", "payee"])
        .assert()
        .failure();
}

#[test]
fn test_state_saved_when_audit_write_fails() {
    let dir = initialized();
    let id = add(&dir, "Luz", "90", "Moradia", "2025-01-05");
    ledger(&dir).args(["transaction", "select", &id]).assert().success();

    // A directory in place of the audit log makes the append fail after the
    // deletion has been written
    let audit_log = dir.path().join("audit.log");
    std::fs::remove_file(&audit_log).unwrap();
    std::fs::create_dir(&audit_log).unwrap();

    ledger(&dir)
        .args(["transaction", "delete", "--force"])
        .assert()
        .failure();

    let state: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("state.json")).unwrap())
            .unwrap();
    assert_eq!(state["selected"], serde_json::json!([]));
}
