// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::error::{FinanceError, Result};
use crate::utils::timestamp;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn handle(store: &Store, backup_dir: &Path) -> anyhow::Result<()> {
    let dest = backup_store(store, backup_dir)?;
    println!("Database backed up to {}", dest.display());
    Ok(())
}

/// `<stem>_backup_<ts>.<ext>` for the store file, e.g. `finance_backup_20250101_093000.db`.
pub fn backup_file_name(db_path: &Path, ts: &str) -> String {
    let stem = db_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "finance".into());
    let ext = db_path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "db".into());
    format!("{}_backup_{}.{}", stem, ts, ext)
}

/// Copies the store file into `dir`. Call only between mutations, never during one.
pub fn backup_store(store: &Store, dir: &Path) -> Result<PathBuf> {
    let src = store.path().ok_or_else(|| FinanceError::Backup {
        path: dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, "in-memory store has no file"),
    })?;
    fs::create_dir_all(dir).map_err(|source| FinanceError::Backup {
        path: dir.to_path_buf(),
        source,
    })?;
    let dest = dir.join(backup_file_name(src, &timestamp()));
    fs::copy(src, &dest).map_err(|source| FinanceError::Backup {
        path: dest.clone(),
        source,
    })?;
    info!(src = %src.display(), dest = %dest.display(), "backup written");
    Ok(dest)
}
