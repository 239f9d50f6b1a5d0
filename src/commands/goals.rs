// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::db::Store;
use crate::ledger;
use crate::query::list_goals_with_progress;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = arg_str(sub, "name").unwrap_or_default();
    let id = ledger::add_goal(
        store,
        name,
        arg_str(sub, "target").unwrap_or_default(),
        arg_str(sub, "deadline").unwrap_or_default(),
    )?;
    println!("Added goal #{} '{}'", id, name.trim());
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let goals = list_goals_with_progress(store)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &goals)? {
        let rows = goals
            .iter()
            .map(|g| {
                vec![
                    g.goal.id.to_string(),
                    g.goal.name.clone(),
                    format!("{}/{}", g.progress, g.goal.target_amount),
                    g.percent()
                        .map(|p| format!("{}%", p))
                        .unwrap_or_else(|| "-".into()),
                    g.remaining().to_string(),
                    g.goal
                        .deadline
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Goal", "Progress", "Done", "Remaining", "Deadline"],
                rows
            )
        );
    }
    Ok(())
}
