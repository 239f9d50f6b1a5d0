// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::query::month_summary;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let month = m.get_one::<String>("month").map(String::as_str);
    let s = month_summary(store, month)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &s)? {
        let rows = vec![
            vec!["Income".to_string(), s.income.to_string()],
            vec!["Expense".to_string(), s.expense.to_string()],
            vec!["Balance (Income - Expense)".to_string(), s.balance.to_string()],
        ];
        println!("{} ({} .. {})", s.month, s.start, s.end);
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}
