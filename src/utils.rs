// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinanceError, Result};
use chrono::{Datelike, Local, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

pub fn parse_date(field: &'static str, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| FinanceError::invalid_date(field, s))
}

/// Blank text means "no date"; anything else must be a valid date.
pub fn parse_optional_date(field: &'static str, s: &str) -> Result<Option<NaiveDate>> {
    match non_blank(Some(s)) {
        Some(t) => parse_date(field, t).map(Some),
        None => Ok(None),
    }
}

/// Parses `YYYY-MM` and returns the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    let t = s.trim();
    if t.len() != 7 || t.as_bytes()[4] != b'-' {
        return Err(FinanceError::invalid_month(s));
    }
    NaiveDate::parse_from_str(&format!("{}-01", t), "%Y-%m-%d")
        .map_err(|_| FinanceError::invalid_month(s))
}

/// Inclusive first and last calendar day of the month starting at `first`.
pub fn month_bounds(first: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let (y, m) = (first.year(), first.month());
    let next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    };
    let last = next
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| FinanceError::invalid_month(&first.format("%Y-%m").to_string()))?;
    Ok((first, last))
}

pub fn current_month() -> String {
    Local::now().date_naive().format("%Y-%m").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
