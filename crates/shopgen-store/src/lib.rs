//! Relational store stages for shopgen.
//!
//! [`ingest_dir`] loads the generated flat files into an embedded SQLite
//! database, replacing tables wholesale, and [`top_spenders`] runs the
//! ranking query over it.

pub mod error;
pub mod load;
pub mod report;
pub mod store;
pub mod table;

pub use error::{StoreError, StoreResult};
pub use load::{IngestSummary, expected_files, ingest_dir};
pub use report::{DEFAULT_REPORT_LIMIT, Spender, top_spenders};
pub use store::SqliteStore;
pub use table::{Column, ColumnKind, ParsedTable};
