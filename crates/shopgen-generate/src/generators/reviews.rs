use rand::Rng;

use shopgen_core::Review;

use super::{GenContext, REVIEW_WINDOW_DAYS, faker};

const REVIEW_WORDS: usize = 16;

/// Reviews reference users and products independently; a reviewer need not
/// have bought the product.
pub fn generate_reviews(ctx: &mut GenContext<'_>) -> Vec<Review> {
    (1..=ctx.record_count())
        .map(|review_id| {
            let user_id = ctx.pick_id();
            let product_id = ctx.pick_id();
            let rating = ctx.rng.random_range(1..=5u8);
            Review {
                review_id,
                user_id,
                product_id,
                rating,
                review_text: faker::sentence(&mut ctx.rng, REVIEW_WORDS),
                review_date: ctx.timestamp_within(REVIEW_WINDOW_DAYS),
            }
        })
        .collect()
}
