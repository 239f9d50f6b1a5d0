// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FinanceError;
use crate::money::Money;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "Income",
            TxType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            _ => Err(FinanceError::InvalidType(s.to_string())),
        }
    }
}

impl ToSql for TxType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TxType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Income" => Ok(TxType::Income),
            "Expense" => Ok(TxType::Expense),
            other => Err(FromSqlError::Other(Box::new(FinanceError::InvalidType(
                other.to_string(),
            )))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: Money,
    pub deadline: Option<NaiveDate>,
}

/// A goal together with its progress, computed from the ledger at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStatus {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress: Money,
}

impl GoalStatus {
    pub fn remaining(&self) -> Money {
        self.goal
            .target_amount
            .checked_sub(self.progress)
            .filter(Money::is_positive)
            .unwrap_or(Money::ZERO)
    }

    /// Progress as a percentage of target, rounded to one decimal place.
    /// None when the ratio does not fit in a Decimal.
    pub fn percent(&self) -> Option<Decimal> {
        let target = self.goal.target_amount.as_decimal();
        if target.is_zero() {
            return Some(Decimal::ZERO);
        }
        self.progress
            .as_decimal()
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|p| p.checked_div(target))
            .map(|p| p.round_dp(1))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub r#type: TxType,
    pub category: String,
    pub amount: Money,
    pub notes: Option<String>,
    pub goal_id: Option<i64>,
}

/// A ledger row joined with the name of the goal it is linked to, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(flatten)]
    pub tx: Transaction,
    pub goal_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: String, // YYYY-MM
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}
