//! SQLite-backed table store.
//!
//! Loading is destructive by contract: [`SqliteStore::overwrite_table`]
//! drops any existing table of the same name before recreating it, so a
//! reload never merges with earlier contents.

use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Transaction, params_from_iter};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::table::ParsedTable;

/// Embedded relational store holding one table per entity kind.
#[derive(Debug)]
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Open the store for writing, creating the file if absent.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let connection = Connection::open_with_flags(path, flags)?;
        Ok(Self { connection })
    }

    /// Open an existing store read-only. A missing file is never created.
    pub fn open_read_only(path: &Path) -> StoreResult<Self> {
        if !path.is_file() {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { connection })
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Replace a single table with the parsed contents.
    pub fn overwrite_table(&mut self, table: &ParsedTable) -> StoreResult<()> {
        let tx = self.connection.transaction()?;
        overwrite_in(&tx, table)?;
        tx.commit()?;
        Ok(())
    }

    /// Replace every given table in one transaction; on error none change.
    pub fn overwrite_tables(&mut self, tables: &[ParsedTable]) -> StoreResult<()> {
        let tx = self.connection.transaction()?;
        for table in tables {
            overwrite_in(&tx, table)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// User table names in alphabetical order.
    pub fn table_names(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.connection.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    pub fn row_count(&self, table: &str) -> StoreResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count: i64 = self.connection.query_row(&sql, [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Declared column names and types, in table order.
    pub fn columns(&self, table: &str) -> StoreResult<Vec<(String, String)>> {
        let sql = format!("PRAGMA table_info({})", quote_ident(table));
        let mut stmt = self.connection.prepare(&sql)?;
        let columns = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))?
            .collect::<Result<Vec<(String, String)>, _>>()?;
        Ok(columns)
    }

    /// Every row of `table` in insertion order.
    pub fn dump_table(&self, table: &str) -> StoreResult<Vec<Vec<Value>>> {
        let sql = format!("SELECT * FROM {} ORDER BY rowid", quote_ident(table));
        let mut stmt = self.connection.prepare(&sql)?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|idx| row.get::<_, Value>(idx))
                    .collect::<rusqlite::Result<Vec<Value>>>()
            })?
            .collect::<Result<Vec<Vec<Value>>, _>>()?;
        Ok(rows)
    }
}

fn overwrite_in(tx: &Transaction<'_>, table: &ParsedTable) -> StoreResult<()> {
    let name = quote_ident(&table.name);
    tx.execute(&format!("DROP TABLE IF EXISTS {name}"), [])?;

    let column_defs = table
        .columns
        .iter()
        .map(|column| format!("{} {}", quote_ident(&column.name), column.kind.sql_type()))
        .collect::<Vec<_>>()
        .join(", ");
    tx.execute(&format!("CREATE TABLE {name} ({column_defs})"), [])?;

    let column_names = table
        .columns
        .iter()
        .map(|column| quote_ident(&column.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=table.columns.len())
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut insert = tx.prepare(&format!(
        "INSERT INTO {name} ({column_names}) VALUES ({placeholders})"
    ))?;
    for row in &table.rows {
        insert.execute(params_from_iter(row.iter()))?;
    }

    debug!(table = %table.name, rows = table.rows.len(), "table overwritten");
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
