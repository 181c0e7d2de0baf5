use rand::Rng;

use shopgen_core::{Money, Order, OrderItem, OrderStatus, Product};

use super::{GenContext, ORDER_WINDOW_DAYS, faker};
use crate::errors::GenerationError;

pub const MAX_QUANTITY: u32 = 5;

/// Orders start with a zero total; [`crate::link::backfill_order_totals`]
/// fills it in once items exist.
pub fn generate_orders(ctx: &mut GenContext<'_>) -> Vec<Order> {
    (1..=ctx.record_count())
        .map(|order_id| {
            let user_id = ctx.pick_id();
            let order_date = ctx.timestamp_within(ORDER_WINDOW_DAYS);
            let status = ctx
                .choose(&OrderStatus::ALL)
                .copied()
                .unwrap_or(OrderStatus::Pending);
            Order {
                order_id,
                user_id,
                order_date,
                status,
                shipping_address: faker::postal_address(&mut ctx.rng),
                total_amount: Money::ZERO,
            }
        })
        .collect()
}

/// Generate items for each order. Item ids run sequentially across orders,
/// so with exactly one item per order `order_item_id == order_id`.
pub fn generate_order_items(
    ctx: &mut GenContext<'_>,
    orders: &[Order],
    products: &[Product],
) -> Result<Vec<OrderItem>, GenerationError> {
    let min_items = ctx.options.min_items_per_order;
    let max_items = ctx.options.max_items_per_order;
    let mut items = Vec::with_capacity(orders.len() * max_items as usize);
    let mut next_id = 1_u32;

    for order in orders {
        let count = if min_items == max_items {
            min_items
        } else {
            ctx.rng.random_range(min_items..=max_items)
        };
        for _ in 0..count {
            let product = ctx.choose(products).ok_or_else(|| {
                GenerationError::InvalidOptions("no products available for order items".into())
            })?;
            let quantity = ctx.rng.random_range(1..=MAX_QUANTITY);
            items.push(OrderItem::new(
                next_id,
                order.order_id,
                product.product_id,
                quantity,
                product.price,
            ));
            next_id += 1;
        }
    }

    Ok(items)
}
