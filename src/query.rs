// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::error::{FinanceError, Result};
use crate::models::{GoalStatus, MonthSummary, Transaction, TransactionRow, TxType};
use crate::money::Money;
use crate::utils::{current_month, month_bounds, non_blank, parse_month};
use chrono::NaiveDate;
use rusqlite::{ToSql, params};
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 2000;
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct TxFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// None or "All" disables the category predicate.
    pub category: Option<String>,
    /// Case-insensitive substring matched against notes or category.
    pub search: Option<String>,
    pub limit: usize,
}

impl Default for TxFilter {
    fn default() -> Self {
        TxFilter {
            date_from: None,
            date_to: None,
            category: None,
            search: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn like_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('%');
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Rows matching every predicate in `filter`, newest date first and, within a
/// date, most recently entered first.
pub fn query_transactions(store: &Store, filter: &TxFilter) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT t.id, t.date, t.type, t.category, t.amount, t.notes, t.goal_id, g.name
         FROM transactions t LEFT JOIN goals g ON t.goal_id=g.id WHERE 1=1",
    );
    let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(from) = filter.date_from {
        sql.push_str(" AND t.date >= ?");
        params_vec.push(Box::new(from));
    }
    if let Some(to) = filter.date_to {
        sql.push_str(" AND t.date <= ?");
        params_vec.push(Box::new(to));
    }
    if let Some(cat) = non_blank(filter.category.as_deref()).filter(|c| *c != ALL_CATEGORIES) {
        sql.push_str(" AND t.category = ?");
        params_vec.push(Box::new(cat.to_string()));
    }
    if let Some(search) = non_blank(filter.search.as_deref()) {
        sql.push_str(
            " AND (t.notes LIKE ? ESCAPE '\\' OR t.category LIKE ? ESCAPE '\\')",
        );
        let pat = like_pattern(search);
        params_vec.push(Box::new(pat.clone()));
        params_vec.push(Box::new(pat));
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC LIMIT ?");
    params_vec.push(Box::new(i64::try_from(filter.limit).unwrap_or(i64::MAX)));

    let mut stmt = store.conn().prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params_vec.iter()), |r| {
        Ok(TransactionRow {
            tx: Transaction {
                id: r.get(0)?,
                date: r.get(1)?,
                r#type: r.get(2)?,
                category: r.get(3)?,
                amount: r.get(4)?,
                notes: r.get(5)?,
                goal_id: r.get(6)?,
            },
            goal_name: r.get(7)?,
        })
    })?;

    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    debug!(?filter, rows = data.len(), "queried transactions");
    Ok(data)
}

/// Sum of all transaction amounts linked to the goal, recomputed on each call.
pub fn goal_progress(store: &Store, goal_id: i64) -> Result<Money> {
    let mut stmt = store
        .conn()
        .prepare("SELECT amount FROM transactions WHERE goal_id=?1")?;
    let amounts = stmt.query_map(params![goal_id], |r| r.get::<_, Money>(0))?;
    let mut total = Money::ZERO;
    for amt in amounts {
        total = total
            .checked_add(amt?)
            .ok_or(FinanceError::Overflow("goal progress"))?;
    }
    Ok(total)
}

/// Every goal in creation order, each with live progress.
pub fn list_goals_with_progress(store: &Store) -> Result<Vec<GoalStatus>> {
    let goals = store.list_goals()?;
    let mut out = Vec::with_capacity(goals.len());
    for goal in goals {
        let progress = goal_progress(store, goal.id)?;
        out.push(GoalStatus { goal, progress });
    }
    Ok(out)
}

/// Income and expense totals over the closed date range of a `YYYY-MM` month.
/// `None` means the current calendar month.
pub fn month_summary(store: &Store, month: Option<&str>) -> Result<MonthSummary> {
    let month = match non_blank(month) {
        Some(m) => m.to_string(),
        None => current_month(),
    };
    let (start, end) = month_bounds(parse_month(&month)?)?;

    let mut stmt = store
        .conn()
        .prepare("SELECT type, amount FROM transactions WHERE date BETWEEN ?1 AND ?2")?;
    let rows = stmt.query_map(params![start, end], |r| {
        Ok((r.get::<_, TxType>(0)?, r.get::<_, Money>(1)?))
    })?;

    let mut income = Money::ZERO;
    let mut expense = Money::ZERO;
    for row in rows {
        let (kind, amt) = row?;
        let total = match kind {
            TxType::Income => &mut income,
            TxType::Expense => &mut expense,
        };
        *total = total
            .checked_add(amt)
            .ok_or(FinanceError::Overflow("month summary"))?;
    }
    let balance = income
        .checked_sub(expense)
        .ok_or(FinanceError::Overflow("month summary"))?;
    debug!(%month, %income, %expense, "month summary");
    Ok(MonthSummary {
        month: start.format("%Y-%m").to_string(),
        start,
        end,
        income,
        expense,
        balance,
    })
}
