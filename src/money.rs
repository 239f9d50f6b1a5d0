// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinanceError, Result};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact base-10 amount. Persisted as its canonical decimal text, never as REAL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Parses user-entered text for a field that must be strictly positive.
    pub fn parse_positive(field: &'static str, text: &str) -> Result<Money> {
        let t = text.trim();
        let d = Decimal::from_str(t)
            .or_else(|_| Decimal::from_scientific(t))
            .map_err(|_| FinanceError::InvalidAmount {
                field,
                value: text.to_string(),
                reason: "not a valid decimal number",
            })?;
        if d <= Decimal::ZERO {
            return Err(FinanceError::InvalidAmount {
                field,
                value: text.to_string(),
                reason: "must be greater than zero",
            });
        }
        Ok(Money(d))
    }

    /// Canonical storage form: the decimal's own text, scale preserved.
    pub fn to_canonical(&self) -> String {
        self.0.to_string()
    }

    /// Exact addition; None when the result leaves Decimal's range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_canonical()))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Decimal::from_str(s)
            .map(Money)
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
