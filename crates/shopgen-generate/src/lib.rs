//! Deterministic synthetic e-commerce data generation for shopgen.
//!
//! This crate fabricates users, products, orders, order items, and reviews
//! from a single seeded random stream, links derived order totals, and
//! writes each collection as CSV.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod link;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult, REPORT_FILE};
pub use errors::GenerationError;
pub use generators::generate_dataset;
pub use link::{LinkError, backfill_order_totals, validate_references};
pub use model::{GenerateOptions, GenerationReport, TableReport, default_anchor};
