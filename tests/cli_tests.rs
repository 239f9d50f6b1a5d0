// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::commands::{exporter, goals, transactions};
use fintrack::config::Config;
use fintrack::{Store, cli};
use tempfile::tempdir;

fn setup() -> Store {
    let mut store = Store::open_in_memory().unwrap();
    store.initialize().unwrap();
    store
}

fn run_tx(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintrack", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(store, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn tx_add_and_list_through_cli() {
    let store = setup();
    run_tx(
        &store,
        &["add", "--date", "2025-01-01", "--type", "income", "--category", "Salary", "--amount", " 1200 "],
    )
    .unwrap();
    run_tx(
        &store,
        &["add", "--date", "2025-01-02", "--category", "Food", "--amount", "8.5", "--notes", "pizza"],
    )
    .unwrap();

    let matches = cli::build_cli().get_matches_from(["fintrack", "tx", "list", "--limit", "1"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&store, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].tx.date.to_string(), "2025-01-02");
            assert_eq!(rows[0].tx.r#type, fintrack::TxType::Expense);
            assert_eq!(rows[0].tx.amount.to_string(), "8.50");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn tx_add_reports_bad_amount() {
    let store = setup();
    let err = run_tx(
        &store,
        &["add", "--date", "2025-01-01", "--category", "Food", "--amount", "ten"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid amount 'ten'"), "{err}");
    assert_eq!(store.count_transactions().unwrap(), 0);
}

#[test]
fn tx_rm_twice_succeeds() {
    let store = setup();
    run_tx(&store, &["add", "--date", "2025-01-01", "--category", "Food", "--amount", "1"]).unwrap();
    run_tx(&store, &["rm", "1"]).unwrap();
    run_tx(&store, &["rm", "1"]).unwrap();
    assert_eq!(store.count_transactions().unwrap(), 0);
}

#[test]
fn list_rejects_malformed_from_date() {
    let store = setup();
    let matches = cli::build_cli().get_matches_from(["fintrack", "tx", "list", "--from", "yesterday"]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, list_m) = tx_m.subcommand().unwrap();
    let err = transactions::query_rows(&store, list_m).unwrap_err();
    assert!(err.to_string().contains("Invalid from 'yesterday'"), "{err}");
}

#[test]
fn goal_add_validates_target() {
    let store = setup();
    let matches = cli::build_cli().get_matches_from([
        "fintrack", "goal", "add", "--name", "Trip", "--target", "0",
    ]);
    let (_, goal_m) = matches.subcommand().unwrap();
    let err = goals::handle(&store, goal_m).unwrap_err();
    assert!(err.to_string().contains("must be greater than zero"), "{err}");
    assert_eq!(store.count_goals().unwrap(), 0);
}

#[test]
fn export_csv_command_writes_file() {
    let store = setup();
    run_tx(&store, &["add", "--date", "2025-01-01", "--category", "Food", "--amount", "3"]).unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let out_str = out.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "fintrack", "export", "csv", "--category", "All", "--out", &out_str,
    ]);
    let (_, export_m) = matches.subcommand().unwrap();
    exporter::handle(&store, export_m).unwrap();
    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("id,date,type,category,amount,notes,goal_name"));
    assert!(contents.contains("2025-01-01,Expense,Food,3.00,,"));
}

#[test]
fn global_paths_resolve_from_flags() {
    let matches = cli::build_cli().get_matches_from([
        "fintrack", "--db", "/tmp/x/ledger.db", "--backup-dir", "/tmp/x/bk", "backup",
    ]);
    let config = Config::from_matches(&matches);
    assert_eq!(config.db_path, std::path::PathBuf::from("/tmp/x/ledger.db"));
    assert_eq!(config.backup_dir, std::path::PathBuf::from("/tmp/x/bk"));
    assert!(!config.verbose);
}
