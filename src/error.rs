// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinanceError>;

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Invalid {field} '{value}', expected {expected}")]
    InvalidDate {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidAmount {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid transaction type '{0}', expected Income or Expense")]
    InvalidType(String),

    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage error at {}: {source}", .path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Export to {} failed: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Backup to {} failed: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FinanceError {
    pub(crate) fn invalid_date(field: &'static str, value: &str) -> Self {
        FinanceError::InvalidDate {
            field,
            value: value.to_string(),
            expected: "YYYY-MM-DD",
        }
    }

    pub(crate) fn invalid_month(value: &str) -> Self {
        FinanceError::InvalidDate {
            field: "month",
            value: value.to_string(),
            expected: "YYYY-MM",
        }
    }

    /// True for input problems the caller can fix by re-entering a field.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FinanceError::InvalidDate { .. }
                | FinanceError::InvalidAmount { .. }
                | FinanceError::MissingField(_)
                | FinanceError::InvalidType(_)
        )
    }
}
