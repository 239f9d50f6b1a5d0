// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinanceError, Result};
use crate::models::{Goal, TxType};
use crate::money::Money;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Salary",
    "Food",
    "Rent",
    "Utilities",
    "Transport",
    "Entertainment",
    "Health",
    "Savings",
    "Miscellaneous",
];

/// Handle over the single-file ledger. Every mutation runs in SQLite's
/// autocommit mode, so it is durable once the call returns.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Store> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| FinanceError::StorageIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened store");
        Ok(Store {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Store> {
        Ok(Store {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    /// Opens and initializes in one step, the usual entry point for a process.
    pub fn open_or_init(path: &Path) -> Result<Store> {
        let mut store = Store::open(path)?;
        store.initialize()?;
        Ok(store)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Backing file, or None for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Creates missing tables and seeds the default categories into an empty
    /// category table. Safe to call on every start.
    pub fn initialize(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS categories(
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS goals(
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            target_amount TEXT NOT NULL,
            deadline TEXT
        );

        -- category is free text on purpose; goal_id is resolved by name above this layer
        CREATE TABLE IF NOT EXISTS transactions(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            type TEXT NOT NULL CHECK(type IN ('Income','Expense')),
            category TEXT NOT NULL,
            amount TEXT NOT NULL,
            notes TEXT,
            goal_id INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
        CREATE INDEX IF NOT EXISTS idx_transactions_goal ON transactions(goal_id);
        "#,
        )?;

        let cnt: i64 = tx.query_row("SELECT COUNT(1) FROM categories", [], |r| r.get(0))?;
        if cnt == 0 {
            {
                let mut stmt = tx.prepare("INSERT INTO categories(name) VALUES (?1)")?;
                for name in DEFAULT_CATEGORIES {
                    stmt.execute(params![name])?;
                }
            }
            info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
        }
        tx.commit()?;
        debug!("schema ready");
        Ok(())
    }

    pub fn insert_transaction(
        &self,
        date: NaiveDate,
        kind: TxType,
        category: &str,
        amount: Money,
        notes: Option<&str>,
        goal_id: Option<i64>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO transactions(date, type, category, amount, notes, goal_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![date, kind, category, amount, notes, goal_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Removes the transaction if present. Returns whether a row was deleted.
    pub fn delete_transaction(&self, id: i64) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(n > 0)
    }

    pub fn insert_goal(
        &self,
        name: &str,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO goals(name, target_amount, deadline) VALUES (?1, ?2, ?3)",
            params![name, target_amount, deadline],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn list_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, target_amount, deadline FROM goals ORDER BY id")?;
        let rows = stmt.query_map([], |r| {
            Ok(Goal {
                id: r.get(0)?,
                name: r.get(1)?,
                target_amount: r.get(2)?,
                deadline: r.get(3)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Exact-name lookup; the lowest id wins when names repeat.
    pub fn goal_id_by_name(&self, name: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM goals WHERE name=?1 ORDER BY id LIMIT 1",
                params![name],
                |r| r.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn count_transactions(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(1) FROM transactions", [], |r| r.get(0))?)
    }

    pub fn count_goals(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(1) FROM goals", [], |r| r.get(0))?)
    }
}
