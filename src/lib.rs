// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod ledger;
pub mod models;
pub mod money;
pub mod query;
pub mod utils;

pub use db::Store;
pub use error::{FinanceError, Result};
pub use models::{GoalStatus, MonthSummary, TransactionRow, TxType};
pub use money::Money;
pub use query::TxFilter;
