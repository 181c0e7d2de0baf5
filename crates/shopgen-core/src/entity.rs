use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five record types in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Users,
    Products,
    Orders,
    OrderItems,
    Reviews,
}

impl EntityKind {
    /// All kinds in generation and load order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Users,
        EntityKind::Products,
        EntityKind::Orders,
        EntityKind::OrderItems,
        EntityKind::Reviews,
    ];

    /// Relational table name for this kind.
    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
            EntityKind::OrderItems => "order_items",
            EntityKind::Reviews => "reviews",
        }
    }

    /// Flat file name for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            EntityKind::Users => "users.csv",
            EntityKind::Products => "products.csv",
            EntityKind::Orders => "orders.csv",
            EntityKind::OrderItems => "order_items.csv",
            EntityKind::Reviews => "reviews.csv",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn serializes_as_snake_case_table_name() {
        for kind in EntityKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.table_name()));
            assert_eq!(serde_json::from_str::<EntityKind>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn file_names_follow_table_names() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.file_name(), format!("{}.csv", kind.table_name()));
        }
    }
}
