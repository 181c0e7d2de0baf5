use chrono::NaiveDateTime;

use crate::money::Money;

/// Product categories offered by the synthetic catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Home,
    Sports,
    Beauty,
    Toys,
    Books,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Home,
        Category::Sports,
        Category::Beauty,
        Category::Toys,
        Category::Books,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Toys => "Toys",
            Category::Books => "Books",
        }
    }
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A customer account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: u32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all users of a dataset.
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub created_at: NaiveDateTime,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub category: Category,
    pub price: Money,
    pub stock: u32,
    pub created_at: NaiveDateTime,
}

/// A purchase placed by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: u32,
    pub user_id: u32,
    pub order_date: NaiveDateTime,
    pub status: OrderStatus,
    pub shipping_address: String,
    /// Zero until the order items are linked back onto their orders.
    pub total_amount: Money,
}

/// A single product line within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_item_id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl OrderItem {
    /// Build an item whose subtotal is derived from quantity and unit price.
    pub fn new(
        order_item_id: u32,
        order_id: u32,
        product_id: u32,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            order_item_id,
            order_id,
            product_id,
            quantity,
            unit_price,
            subtotal: unit_price.times(quantity),
        }
    }
}

/// A product rating left by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: u32,
    pub user_id: u32,
    pub product_id: u32,
    pub rating: u8,
    pub review_text: String,
    pub review_date: NaiveDateTime,
}
