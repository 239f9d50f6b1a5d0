// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::db::Store;
use crate::ledger;
use crate::models::{TransactionRow, TxType};
use crate::query::{TxFilter, query_transactions};
use crate::utils::{maybe_print_json, parse_optional_date, pretty_table, today};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = arg_str(sub, "date")
        .map(str::to_string)
        .unwrap_or_else(|| today().to_string());
    let kind: TxType = arg_str(sub, "type").unwrap_or("Expense").parse()?;
    let category = arg_str(sub, "category").unwrap_or_default();
    let amount = arg_str(sub, "amount").unwrap_or_default();

    let id = ledger::add_transaction(
        store,
        &date,
        kind,
        category,
        amount,
        arg_str(sub, "notes"),
        arg_str(sub, "goal"),
    )?;
    println!(
        "Recorded {} #{} of {} on {} ({})",
        kind,
        id,
        amount.trim(),
        date.trim(),
        category.trim()
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Transaction id is required"))?;
    ledger::delete_transaction(store, id)?;
    println!("Deleted transaction #{}", id);
    Ok(())
}

/// Builds a query filter from the shared `--from/--to/--category/--search/--limit` args.
pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let mut filter = TxFilter {
        date_from: parse_optional_date("from", arg_str(sub, "from").unwrap_or_default())?,
        date_to: parse_optional_date("to", arg_str(sub, "to").unwrap_or_default())?,
        category: arg_str(sub, "category").map(str::to_string),
        search: arg_str(sub, "search").map(str::to_string),
        ..TxFilter::default()
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        filter.limit = *limit;
    }
    Ok(filter)
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = filter_from_matches(sub)?;
    Ok(query_transactions(store, &filter)?)
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.tx.id.to_string(),
                    r.tx.date.to_string(),
                    r.tx.r#type.to_string(),
                    r.tx.category.clone(),
                    r.tx.amount.to_string(),
                    r.goal_name.clone().unwrap_or_default(),
                    r.tx.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Amount", "Goal", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}
