use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use shopgen_core::EntityKind;

use crate::errors::GenerationError;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Records generated per entity kind.
    pub record_count: u32,
    /// Seed for the single random stream behind every generated value.
    pub seed: u64,
    /// Instant treated as "now" when sampling relative timestamps.
    pub anchor: NaiveDateTime,
    /// Fewest items generated per order.
    pub min_items_per_order: u32,
    /// Most items generated per order.
    pub max_items_per_order: u32,
    /// Maximum draws spent finding an unused email before suffixing.
    pub max_email_attempts: u32,
}

/// Default anchor: 2025-01-01T00:00:00.
pub fn default_anchor() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            record_count: 50,
            seed: 42,
            anchor: default_anchor(),
            min_items_per_order: 1,
            max_items_per_order: 1,
            max_email_attempts: 50,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.min_items_per_order > self.max_items_per_order {
            return Err(GenerationError::InvalidOptions(format!(
                "min_items_per_order ({}) exceeds max_items_per_order ({})",
                self.min_items_per_order, self.max_items_per_order
            )));
        }
        if self.max_items_per_order > MAX_ITEMS_PER_ORDER {
            return Err(GenerationError::InvalidOptions(format!(
                "max_items_per_order must be at most {MAX_ITEMS_PER_ORDER}"
            )));
        }
        if self.max_email_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_email_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

pub const MAX_ITEMS_PER_ORDER: u32 = 100;

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub entity: EntityKind,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run, written as `generation_report.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub record_count: u32,
    pub anchor: NaiveDateTime,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(options: &GenerateOptions) -> Self {
        Self {
            seed: options.seed,
            record_count: options.record_count,
            anchor: options.anchor,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: TableReport) {
        self.bytes_written += table.bytes;
        self.tables.push(table);
    }
}
