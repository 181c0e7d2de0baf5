//! Referential linking between generated collections.
//!
//! Generation happens in two explicit steps: orders are created with a zero
//! total, then [`backfill_order_totals`] derives each total from its items.
//! [`validate_references`] checks the finished dataset.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use shopgen_core::{Dataset, EntityKind, Money, Order, OrderItem};

/// A cross-entity invariant that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("{entity} id {found} at position {position} is not sequential")]
    NonSequentialId {
        entity: EntityKind,
        position: usize,
        found: u32,
    },
    #[error("{entity} {id}: {field} {target} does not exist")]
    DanglingReference {
        entity: EntityKind,
        id: u32,
        field: &'static str,
        target: u32,
    },
    #[error("duplicate email '{0}'")]
    DuplicateEmail(String),
    #[error("order item {0}: subtotal does not equal quantity * unit_price")]
    SubtotalMismatch(u32),
    #[error("order {order_id}: total_amount {found} but items sum to {expected}")]
    TotalMismatch {
        order_id: u32,
        found: Money,
        expected: Money,
    },
}

/// Per-order sum of item subtotals. Orders without items are absent.
pub fn order_subtotals(items: &[OrderItem]) -> BTreeMap<u32, Money> {
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(item.order_id).or_insert(Money::ZERO) += item.subtotal;
    }
    totals
}

/// Overwrite every order's `total_amount` with the sum of its items.
pub fn backfill_order_totals(orders: &mut [Order], items: &[OrderItem]) {
    let totals = order_subtotals(items);
    for order in orders {
        order.total_amount = totals.get(&order.order_id).copied().unwrap_or(Money::ZERO);
    }
}

pub fn validate_references(dataset: &Dataset) -> Result<(), LinkError> {
    check_sequential(EntityKind::Users, dataset.users.iter().map(|u| u.user_id))?;
    check_sequential(
        EntityKind::Products,
        dataset.products.iter().map(|p| p.product_id),
    )?;
    check_sequential(EntityKind::Orders, dataset.orders.iter().map(|o| o.order_id))?;
    check_sequential(
        EntityKind::OrderItems,
        dataset.order_items.iter().map(|i| i.order_item_id),
    )?;
    check_sequential(
        EntityKind::Reviews,
        dataset.reviews.iter().map(|r| r.review_id),
    )?;

    let mut emails = HashSet::new();
    for user in &dataset.users {
        if !emails.insert(user.email.as_str()) {
            return Err(LinkError::DuplicateEmail(user.email.clone()));
        }
    }

    let users = dataset.users.len();
    let products = dataset.products.len();
    let orders = dataset.orders.len();

    for order in &dataset.orders {
        check_ref(EntityKind::Orders, order.order_id, "user_id", order.user_id, users)?;
    }
    for item in &dataset.order_items {
        let id = item.order_item_id;
        check_ref(EntityKind::OrderItems, id, "order_id", item.order_id, orders)?;
        check_ref(EntityKind::OrderItems, id, "product_id", item.product_id, products)?;
        if item.subtotal != item.unit_price.times(item.quantity) {
            return Err(LinkError::SubtotalMismatch(id));
        }
    }
    for review in &dataset.reviews {
        let id = review.review_id;
        check_ref(EntityKind::Reviews, id, "user_id", review.user_id, users)?;
        check_ref(EntityKind::Reviews, id, "product_id", review.product_id, products)?;
    }

    let totals = order_subtotals(&dataset.order_items);
    for order in &dataset.orders {
        let expected = totals.get(&order.order_id).copied().unwrap_or(Money::ZERO);
        if order.total_amount != expected {
            return Err(LinkError::TotalMismatch {
                order_id: order.order_id,
                found: order.total_amount,
                expected,
            });
        }
    }

    Ok(())
}

fn check_sequential(
    entity: EntityKind,
    ids: impl Iterator<Item = u32>,
) -> Result<(), LinkError> {
    for (position, found) in ids.enumerate() {
        if found as usize != position + 1 {
            return Err(LinkError::NonSequentialId {
                entity,
                position,
                found,
            });
        }
    }
    Ok(())
}

// Ids are sequential from 1, so a reference resolves iff it is in [1, len].
fn check_ref(
    entity: EntityKind,
    id: u32,
    field: &'static str,
    target: u32,
    len: usize,
) -> Result<(), LinkError> {
    if target == 0 || target as usize > len {
        return Err(LinkError::DanglingReference {
            entity,
            id,
            field,
            target,
        });
    }
    Ok(())
}
