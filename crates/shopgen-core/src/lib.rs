//! Core contracts for shopgen.
//!
//! This crate defines the e-commerce entity model, exact monetary amounts,
//! and the tabular layout shared by the generator, the loader, and the CLI.

pub mod dataset;
pub mod entity;
pub mod error;
pub mod model;
pub mod money;
pub mod tabular;

pub use dataset::Dataset;
pub use entity::EntityKind;
pub use error::{Error, Result};
pub use model::{Category, Order, OrderItem, OrderStatus, Product, Review, User};
pub use money::Money;
pub use tabular::{Record, TIMESTAMP_FORMAT, format_timestamp, parse_timestamp};

/// Name of the embedded database file written by ingest.
pub const DEFAULT_DATABASE_FILE: &str = "ecommerce.db";
