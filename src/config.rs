// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

pub const DEFAULT_DB_FILE: &str = "finance.db";
pub const DEFAULT_BACKUP_DIR: &str = "backups";

/// Paths resolved from `--db`/`--backup-dir`, then `FINTRACK_DB`/`FINTRACK_BACKUP_DIR`,
/// then the working-directory defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub backup_dir: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Config {
        let defaults = Config::default();
        Config {
            db_path: m
                .get_one::<String>("db")
                .map(|s| PathBuf::from(s.trim()))
                .unwrap_or(defaults.db_path),
            backup_dir: m
                .get_one::<String>("backup_dir")
                .map(|s| PathBuf::from(s.trim()))
                .unwrap_or(defaults.backup_dir),
            verbose: m.get_flag("verbose"),
        }
    }

    /// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
    pub fn log_filter(&self) -> tracing_subscriber::EnvFilter {
        let fallback = if self.verbose { "debug" } else { "warn" };
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback))
    }
}
