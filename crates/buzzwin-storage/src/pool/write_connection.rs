//! The single serialized write connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use buzzwin_core::errors::BuzzwinResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> BuzzwinResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> BuzzwinResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` while holding the writer lock.
    pub fn with_conn<F, T>(&self, f: F) -> BuzzwinResult<T>
    where
        F: FnOnce(&Connection) -> BuzzwinResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("write lock poisoned"))?;
        f(&guard)
    }

    /// Run `f` inside a `BEGIN IMMEDIATE` transaction. An error from `f`
    /// rolls the transaction back.
    pub fn with_immediate_transaction<F, T>(&self, f: F) -> BuzzwinResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> BuzzwinResult<T>,
    {
        self.with_conn(|conn| {
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
                .map_err(|e| to_storage_err(format!("failed to begin immediate transaction: {e}")))?;
            let result = f(&tx)?;
            tx.commit()
                .map_err(|e| to_storage_err(format!("failed to commit: {e}")))?;
            Ok(result)
        })
    }
}
