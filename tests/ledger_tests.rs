// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::query::{TxFilter, goal_progress, query_transactions};
use fintrack::{FinanceError, Store, TxType, ledger};
use rust_decimal::Decimal;
use std::str::FromStr;

fn setup() -> Store {
    let mut store = Store::open_in_memory().unwrap();
    store.initialize().unwrap();
    store
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn add_then_query_returns_exact_amount() {
    let store = setup();
    let id = ledger::add_transaction(
        &store,
        "2025-04-10",
        TxType::Expense,
        "Food",
        "19.99",
        Some("  lunch "),
        None,
    )
    .unwrap();

    let filter = TxFilter {
        date_from: Some("2025-04-01".parse().unwrap()),
        date_to: Some("2025-04-30".parse().unwrap()),
        ..TxFilter::default()
    };
    let rows = query_transactions(&store, &filter).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx.id, id);
    assert_eq!(rows[0].tx.amount.as_decimal(), dec("19.99"));
    assert_eq!(rows[0].tx.r#type, TxType::Expense);
    assert_eq!(rows[0].tx.notes.as_deref(), Some("lunch"));
    assert_eq!(rows[0].goal_name, None);
}

#[test]
fn invalid_amounts_leave_store_untouched() {
    let store = setup();
    for bad in ["abc", "0", "-5", "", "  ", "1.2.3"] {
        let err = ledger::add_transaction(&store, "2025-01-01", TxType::Income, "Salary", bad, None, None)
            .unwrap_err();
        assert!(matches!(err, FinanceError::InvalidAmount { .. }), "{bad}: {err}");
        let err = ledger::add_goal(&store, "Trip", bad, "").unwrap_err();
        assert!(
            matches!(err, FinanceError::InvalidAmount { .. } | FinanceError::MissingField(_)),
            "{bad}: {err}"
        );
    }
    assert_eq!(store.count_transactions().unwrap(), 0);
    assert_eq!(store.count_goals().unwrap(), 0);
}

#[test]
fn malformed_goal_amount_is_invalid_amount() {
    let store = setup();
    let err = ledger::add_goal(&store, "Trip", "lots", "").unwrap_err();
    assert!(matches!(err, FinanceError::InvalidAmount { field: "target amount", .. }));
    assert!(err.to_string().contains("lots"));
}

#[test]
fn invalid_date_rejected_before_insert() {
    let store = setup();
    let err = ledger::add_transaction(&store, "2025-02-30", TxType::Expense, "Food", "5", None, None)
        .unwrap_err();
    assert!(matches!(err, FinanceError::InvalidDate { field: "date", .. }));
    assert!(err.is_validation());
    assert_eq!(store.count_transactions().unwrap(), 0);
}

#[test]
fn goal_requires_name_and_target() {
    let store = setup();
    assert!(matches!(
        ledger::add_goal(&store, "  ", "100", "").unwrap_err(),
        FinanceError::MissingField("name")
    ));
    assert!(matches!(
        ledger::add_goal(&store, "Car", "", "").unwrap_err(),
        FinanceError::MissingField("target amount")
    ));
    assert!(matches!(
        ledger::add_goal(&store, "Car", "100", "next year").unwrap_err(),
        FinanceError::InvalidDate { field: "deadline", .. }
    ));
    assert_eq!(store.count_goals().unwrap(), 0);

    ledger::add_goal(&store, "Car", "100", "").unwrap();
    let goals = store.list_goals().unwrap();
    assert_eq!(goals[0].deadline, None);
}

#[test]
fn delete_is_idempotent() {
    let store = setup();
    let keep = ledger::add_transaction(&store, "2025-01-01", TxType::Income, "Salary", "10", None, None)
        .unwrap();
    let id = ledger::add_transaction(&store, "2025-01-02", TxType::Expense, "Food", "3", None, None)
        .unwrap();

    ledger::delete_transaction(&store, id).unwrap();
    assert_eq!(store.count_transactions().unwrap(), 1);
    ledger::delete_transaction(&store, id).unwrap();
    assert_eq!(store.count_transactions().unwrap(), 1);
    ledger::delete_transaction(&store, 9999).unwrap();

    let rows = query_transactions(&store, &TxFilter::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tx.id, keep);
}

#[test]
fn goal_progress_tracks_linked_transactions() {
    let store = setup();
    let goal = ledger::add_goal(&store, "Emergency fund", "1000", "").unwrap();
    let other = ledger::add_goal(&store, "Holiday", "500", "2026-06-01").unwrap();
    assert_eq!(goal_progress(&store, goal).unwrap().as_decimal(), Decimal::ZERO);

    let a = ledger::add_transaction(
        &store,
        "2025-01-05",
        TxType::Expense,
        "Savings",
        "120.10",
        None,
        Some("Emergency fund"),
    )
    .unwrap();
    ledger::add_transaction(
        &store,
        "2025-02-05",
        TxType::Expense,
        "Savings",
        "79.95",
        None,
        Some("Emergency fund"),
    )
    .unwrap();
    ledger::add_transaction(&store, "2025-02-06", TxType::Expense, "Savings", "40", None, Some("Holiday"))
        .unwrap();

    assert_eq!(goal_progress(&store, goal).unwrap().as_decimal(), dec("200.05"));
    assert_eq!(goal_progress(&store, other).unwrap().as_decimal(), dec("40"));

    ledger::delete_transaction(&store, a).unwrap();
    assert_eq!(goal_progress(&store, goal).unwrap().as_decimal(), dec("79.95"));
}

#[test]
fn unknown_goal_name_records_without_link() {
    let store = setup();
    let id = ledger::add_transaction(
        &store,
        "2025-01-05",
        TxType::Expense,
        "Savings",
        "10",
        None,
        Some("Nonexistent"),
    )
    .unwrap();
    let rows = query_transactions(&store, &TxFilter::default()).unwrap();
    assert_eq!(rows[0].tx.id, id);
    assert_eq!(rows[0].tx.goal_id, None);
    assert_eq!(rows[0].goal_name, None);
}

#[test]
fn category_outside_list_is_accepted() {
    let store = setup();
    ledger::add_transaction(&store, "2025-01-05", TxType::Expense, "Pets", "10", None, None).unwrap();
    let rows = query_transactions(&store, &TxFilter::default()).unwrap();
    assert_eq!(rows[0].tx.category, "Pets");
    assert!(!store.list_categories().unwrap().contains(&"Pets".to_string()));
}
