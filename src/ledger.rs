// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Validating mutations over the [`Store`]. Every input is checked before the
//! single store write, so a rejected call never leaves partial state behind.

use crate::db::Store;
use crate::error::{FinanceError, Result};
use crate::models::TxType;
use crate::money::Money;
use crate::utils::{non_blank, parse_date, parse_optional_date};
use tracing::{debug, info};

/// Records a transaction and returns its id.
///
/// A non-empty `goal_name` that matches no goal is not an error: the
/// transaction is stored without a goal link.
pub fn add_transaction(
    store: &Store,
    date_text: &str,
    kind: TxType,
    category: &str,
    amount_text: &str,
    notes: Option<&str>,
    goal_name: Option<&str>,
) -> Result<i64> {
    let date = parse_date("date", date_text)?;
    let amount = Money::parse_positive("amount", amount_text)?;
    let category = category.trim();

    let goal_id = match non_blank(goal_name) {
        Some(name) => {
            let id = store.goal_id_by_name(name)?;
            if id.is_none() {
                debug!(goal = name, "goal not found, recording without link");
            }
            id
        }
        None => None,
    };

    let id = store.insert_transaction(
        date,
        kind,
        category,
        amount,
        non_blank(notes),
        goal_id,
    )?;
    info!(id, %date, %kind, category, %amount, ?goal_id, "transaction recorded");
    Ok(id)
}

pub fn add_goal(
    store: &Store,
    name: &str,
    target_amount_text: &str,
    deadline_text: &str,
) -> Result<i64> {
    let name = non_blank(Some(name)).ok_or(FinanceError::MissingField("name"))?;
    let target_text = non_blank(Some(target_amount_text))
        .ok_or(FinanceError::MissingField("target amount"))?;
    let target = Money::parse_positive("target amount", target_text)?;
    let deadline = parse_optional_date("deadline", deadline_text)?;

    let id = store.insert_goal(name, target, deadline)?;
    info!(id, name, %target, ?deadline, "goal created");
    Ok(id)
}

/// Idempotent: deleting an unknown id succeeds without changing anything.
pub fn delete_transaction(store: &Store, id: i64) -> Result<()> {
    let removed = store.delete_transaction(id)?;
    if removed {
        info!(id, "transaction deleted");
    } else {
        debug!(id, "delete of unknown transaction ignored");
    }
    Ok(())
}
