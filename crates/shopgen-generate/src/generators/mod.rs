//! Entity generators.
//!
//! All generators share one [`GenContext`], so the order in which they run
//! is part of the output contract: users, products, orders, order items,
//! then reviews.

mod catalog;
pub mod faker;
mod orders;
mod reviews;
mod users;

use chrono::{NaiveDateTime, TimeDelta};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use shopgen_core::Dataset;

use crate::errors::GenerationError;
use crate::link::{backfill_order_totals, validate_references};
use crate::model::GenerateOptions;

pub use catalog::generate_products;
pub use orders::{generate_order_items, generate_orders};
pub use reviews::generate_reviews;
pub use users::generate_users;

const SECONDS_PER_DAY: i64 = 86_400;

/// Look-back windows, in days before the anchor.
pub const USER_WINDOW_DAYS: i64 = 730;
pub const PRODUCT_WINDOW_DAYS: i64 = 365;
pub const ORDER_WINDOW_DAYS: i64 = 180;
pub const REVIEW_WINDOW_DAYS: i64 = 180;

/// Shared random source and options for a generation pass.
pub struct GenContext<'a> {
    pub options: &'a GenerateOptions,
    pub rng: ChaCha8Rng,
}

impl<'a> GenContext<'a> {
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        }
    }

    pub fn record_count(&self) -> u32 {
        self.options.record_count
    }

    /// Uniform id in `[1, record_count]`.
    pub fn pick_id(&mut self) -> u32 {
        self.rng.random_range(1..=self.options.record_count)
    }

    /// Uniform whole-second timestamp within `days` before the anchor.
    pub fn timestamp_within(&mut self, days: i64) -> NaiveDateTime {
        let offset = self.rng.random_range(0..=days * SECONDS_PER_DAY);
        self.options.anchor - TimeDelta::seconds(offset)
    }

    pub fn choose<'s, T>(&mut self, values: &'s [T]) -> Option<&'s T> {
        values.choose(&mut self.rng)
    }
}

/// Run every generator and the linker, returning a checked dataset.
pub fn generate_dataset(options: &GenerateOptions) -> Result<Dataset, GenerationError> {
    options.validate()?;
    let mut ctx = GenContext::new(options);

    let users = generate_users(&mut ctx);
    let products = generate_products(&mut ctx);
    let mut orders = generate_orders(&mut ctx);
    let order_items = generate_order_items(&mut ctx, &orders, &products)?;
    backfill_order_totals(&mut orders, &order_items);
    let reviews = generate_reviews(&mut ctx);

    let dataset = Dataset {
        users,
        products,
        orders,
        order_items,
        reviews,
    };
    validate_references(&dataset)?;
    debug!(
        users = dataset.users.len(),
        products = dataset.products.len(),
        orders = dataset.orders.len(),
        order_items = dataset.order_items.len(),
        reviews = dataset.reviews.len(),
        "dataset generated"
    );
    Ok(dataset)
}
