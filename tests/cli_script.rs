use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zakat_ledger_cli").unwrap();
    cmd.env("ZAKAT_LEDGER_CLI_SCRIPT", "1")
        .env("ZAKAT_LEDGER_HOME", home.path())
        .env("ZAKAT_LEDGER_TODAY", "2024-03-15")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_saves_and_summarizes() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("select 2024-03-01\nprofit 1000\nsave\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Data saved successfully!"))
        .stdout(contains("₹1,000.00"))
        .stdout(contains("₹975.00"));

    let stored = std::fs::read_to_string(home.path().join("store/financialData.json")).unwrap();
    assert!(stored.contains("\"2024-03-01\""));
}

#[test]
fn records_persist_between_runs() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("select 2024-03-05\nprofit 500\nsadaka 10\nsave\n")
        .assert()
        .success();

    cli(&home)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(contains("Tue, Mar 5, 2024"))
        .stdout(contains("₹477.50"));
}

#[test]
fn invalid_profit_is_reported() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("profit nope\nsave\nlist\n")
        .assert()
        .success()
        .stdout(contains("Please enter a valid profit amount"))
        .stdout(contains("No records yet."));
}

#[test]
fn delete_without_yes_is_declined_in_scripts() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("profit 100\nsave\ndelete 2024-03-15\nlist\ndelete 2024-03-15 --yes\n")
        .assert()
        .success()
        .stdout(contains("Delete cancelled."))
        .stdout(contains("Fri, Mar 15, 2024"))
        .stdout(contains("Record deleted successfully!"));
}

#[test]
fn unknown_command_suggests_closest() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("summery\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `summery`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn help_lists_commands_by_section() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(contains("Calendar:"))
        .stdout(contains("Charts & export:"))
        .stdout(contains("copy-link"));
}

#[test]
fn export_writes_csv_into_requested_dir() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    cli(&home)
        .write_stdin(format!(
            "profit 1000\nsave\nexport {}\n",
            out.path().display()
        ))
        .assert()
        .success()
        .stdout(contains("Data exported successfully!"));

    let csv = std::fs::read_to_string(out.path().join("profit-zakat-data-2024-03-15.csv")).unwrap();
    assert!(csv.starts_with("Date,Profit (₹),Zakat Rate (%),Zakat (₹),Sadaka (₹),Net Profit (₹)\n"));
    assert!(csv.contains("2024-03-15,1000,2.5,25,0,975"));
}

#[test]
fn copy_link_falls_back_to_file_clipboard() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("copy-link\nconfig set app_url https://example.com/zakat\nshare\ncopy-link\n")
        .assert()
        .success()
        .stdout(contains("No app link configured"))
        .stdout(contains("https://wa.me/?text="))
        .stdout(contains("Link copied to clipboard!"));

    let copied = std::fs::read_to_string(home.path().join("clipboard.txt")).unwrap();
    assert_eq!(copied, "https://example.com/zakat");
}

#[test]
fn chart_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let output = cli(&home)
        .write_stdin("config set ui_color_enabled off\nselect 2024-03-01\nprofit 1000\nsave\nchart --json\n")
        .assert()
        .success()
        .stdout(contains("\"title\": \"Daily and Cumulative Profit\""))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert!(predicate::str::contains("\"yAxisTitle\": \"Amount (₹)\"").eval(&text));
}
