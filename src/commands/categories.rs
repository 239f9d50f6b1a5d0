// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let names = store.list_categories()?;
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &names)? {
            let data = names.into_iter().map(|n| vec![n]).collect();
            println!("{}", pretty_table(&["Category"], data));
        }
    }
    Ok(())
}
