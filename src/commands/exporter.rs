// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg_str, transactions::query_rows};
use crate::db::Store;
use crate::error::{FinanceError, Result};
use crate::models::TransactionRow;
use crate::utils::timestamp;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 7] = [
    "id", "date", "type", "category", "amount", "notes", "goal_name",
];

pub fn handle(store: &Store, m: &clap::ArgMatches) -> anyhow::Result<()> {
    if let Some(("csv", sub)) = m.subcommand() {
        let rows = query_rows(store, sub)?;
        if rows.is_empty() {
            println!("No transactions to export for the current filter.");
            return Ok(());
        }
        let out = arg_str(sub, "out")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Path::new);
        let written = export_csv(&rows, out)?;
        println!("Exported {} transactions to {}", rows.len(), written.display());
    }
    Ok(())
}

/// `transactions_export_<YYYYMMDD_HHMMSS>.csv` in the working directory.
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!("transactions_export_{}.csv", timestamp()))
}

/// Writes `rows` as CSV to `path`, or to [`default_export_path`] when absent.
/// Returns the path written.
pub fn export_csv(rows: &[TransactionRow], path: Option<&Path>) -> Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_export_path);

    let write = || -> std::result::Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(CSV_HEADER)?;
        for r in rows {
            wtr.write_record([
                r.tx.id.to_string(),
                r.tx.date.to_string(),
                r.tx.r#type.to_string(),
                r.tx.category.clone(),
                r.tx.amount.to_string(),
                r.tx.notes.clone().unwrap_or_default(),
                r.goal_name.clone().unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    };
    write().map_err(|source| FinanceError::Export {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), rows = rows.len(), "exported transactions");
    Ok(path)
}
