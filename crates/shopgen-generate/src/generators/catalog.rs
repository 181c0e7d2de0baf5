use rand::Rng;

use shopgen_core::{Category, Money, Product};

use super::{GenContext, PRODUCT_WINDOW_DAYS, faker};

/// Price bounds in cents: 5.00 to 500.00 inclusive.
pub const MIN_PRICE_CENTS: i64 = 500;
pub const MAX_PRICE_CENTS: i64 = 50_000;
pub const MIN_STOCK: u32 = 10;
pub const MAX_STOCK: u32 = 500;

pub fn generate_products(ctx: &mut GenContext<'_>) -> Vec<Product> {
    (1..=ctx.record_count())
        .map(|product_id| {
            let name = faker::catch_phrase(&mut ctx.rng);
            let category = ctx
                .choose(&Category::ALL)
                .copied()
                .unwrap_or(Category::Electronics);
            let price =
                Money::from_cents(ctx.rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS));
            let stock = ctx.rng.random_range(MIN_STOCK..=MAX_STOCK);
            Product {
                product_id,
                name,
                category,
                price,
                stock,
                created_at: ctx.timestamp_within(PRODUCT_WINDOW_DAYS),
            }
        })
        .collect()
}
