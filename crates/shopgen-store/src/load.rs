//! Flat files to relational store.

use std::path::{Path, PathBuf};
use std::time::Instant;

use shopgen_core::EntityKind;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::store::SqliteStore;
use crate::table::ParsedTable;

/// Rows loaded per table by one ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub database: PathBuf,
    pub tables: Vec<(EntityKind, usize)>,
}

impl IngestSummary {
    pub fn rows(&self, kind: EntityKind) -> Option<usize> {
        self.tables
            .iter()
            .find(|(entity, _)| *entity == kind)
            .map(|(_, rows)| *rows)
    }
}

/// Path of each expected flat file under `data_dir`, in load order.
pub fn expected_files(data_dir: &Path) -> Vec<(EntityKind, PathBuf)> {
    EntityKind::ALL
        .iter()
        .map(|kind| (*kind, data_dir.join(kind.file_name())))
        .collect()
}

/// Load the five flat files from `data_dir` into the store at `database`.
///
/// Every file is checked and parsed before the store is opened, so a missing
/// or unreadable file leaves the database untouched.
pub fn ingest_dir(data_dir: &Path, database: &Path) -> StoreResult<IngestSummary> {
    let start = Instant::now();
    let files = expected_files(data_dir);
    if let Some((_, path)) = files.iter().find(|(_, path)| !path.is_file()) {
        return Err(StoreError::NotFound { path: path.clone() });
    }

    let tables = files
        .iter()
        .map(|(kind, path)| ParsedTable::from_csv(kind.table_name(), path))
        .collect::<StoreResult<Vec<_>>>()?;

    let mut store = SqliteStore::open(database)?;
    store.overwrite_tables(&tables)?;

    let summary = IngestSummary {
        database: database.to_path_buf(),
        tables: files
            .iter()
            .zip(&tables)
            .map(|((kind, _), table)| (*kind, table.row_count()))
            .collect(),
    };
    for (kind, rows) in &summary.tables {
        info!(table = %kind, rows, "table loaded");
    }
    info!(
        database = %database.display(),
        duration_ms = start.elapsed().as_millis() as u64,
        "ingest completed"
    );
    Ok(summary)
}
