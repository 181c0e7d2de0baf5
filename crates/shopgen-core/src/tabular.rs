use chrono::NaiveDateTime;

use crate::entity::EntityKind;
use crate::model::{Order, OrderItem, Product, Review, User};

/// Timestamp rendering used in flat files (sortable, no zone suffix).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A record that can be laid out as one row of a flat file.
pub trait Record {
    const KIND: EntityKind;
    /// Column names in output order.
    const HEADER: &'static [&'static str];

    /// Field values in `HEADER` order.
    fn row(&self) -> Vec<String>;
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

impl Record for User {
    const KIND: EntityKind = EntityKind::Users;
    const HEADER: &'static [&'static str] = &[
        "user_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "address",
        "city",
        "country",
        "created_at",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.city.clone(),
            self.country.clone(),
            format_timestamp(&self.created_at),
        ]
    }
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Products;
    const HEADER: &'static [&'static str] = &[
        "product_id",
        "name",
        "category",
        "price",
        "stock",
        "created_at",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.product_id.to_string(),
            self.name.clone(),
            self.category.as_str().to_string(),
            self.price.to_string(),
            self.stock.to_string(),
            format_timestamp(&self.created_at),
        ]
    }
}

impl Record for Order {
    const KIND: EntityKind = EntityKind::Orders;
    const HEADER: &'static [&'static str] = &[
        "order_id",
        "user_id",
        "order_date",
        "status",
        "shipping_address",
        "total_amount",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.user_id.to_string(),
            format_timestamp(&self.order_date),
            self.status.as_str().to_string(),
            self.shipping_address.clone(),
            self.total_amount.to_string(),
        ]
    }
}

impl Record for OrderItem {
    const KIND: EntityKind = EntityKind::OrderItems;
    const HEADER: &'static [&'static str] = &[
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
        "subtotal",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.order_item_id.to_string(),
            self.order_id.to_string(),
            self.product_id.to_string(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.subtotal.to_string(),
        ]
    }
}

impl Record for Review {
    const KIND: EntityKind = EntityKind::Reviews;
    const HEADER: &'static [&'static str] = &[
        "review_id",
        "user_id",
        "product_id",
        "rating",
        "review_text",
        "review_date",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.review_id.to_string(),
            self.user_id.to_string(),
            self.product_id.to_string(),
            self.rating.to_string(),
            self.review_text.clone(),
            format_timestamp(&self.review_date),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::OrderStatus;
    use crate::money::Money;

    #[test]
    fn row_width_matches_header() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 0))
            .unwrap();
        let order = Order {
            order_id: 3,
            user_id: 9,
            order_date: at,
            status: OrderStatus::Shipped,
            shipping_address: "1 Main St, Springfield".to_string(),
            total_amount: Money::from_cents(4210),
        };
        let row = order.row();
        assert_eq!(row.len(), Order::HEADER.len());
        assert_eq!(row[2], "2024-03-09T07:05:00");
        assert_eq!(row[3], "shipped");
        assert_eq!(row[5], "42.10");
    }

    #[test]
    fn timestamps_round_trip() {
        let at = parse_timestamp("2023-12-31T23:59:59").unwrap();
        assert_eq!(format_timestamp(&at), "2023-12-31T23:59:59");
        assert!(parse_timestamp("2023-12-31").is_err());
    }
}
