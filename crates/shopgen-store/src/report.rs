//! Top-spender report over the loaded store.

use std::fmt;
use std::path::Path;

use rusqlite::params;
use rusqlite::types::Type;
use shopgen_core::Money;
use tracing::debug;

use crate::error::StoreResult;
use crate::store::SqliteStore;

/// Rows shown by the default report.
pub const DEFAULT_REPORT_LIMIT: u32 = 5;

const TOP_SPENDERS_SQL: &str = "
SELECT
    u.first_name || ' ' || u.last_name AS user_name,
    ROUND(SUM(oi.quantity * oi.unit_price), 2) AS total_spent
FROM users u
JOIN orders o ON u.user_id = o.user_id
JOIN order_items oi ON o.order_id = oi.order_id
GROUP BY u.user_id
ORDER BY total_spent DESC, u.user_id ASC
LIMIT ?1";

/// A user and their spending across all orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spender {
    pub name: String,
    pub total_spent: Money,
}

impl fmt::Display for Spender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.name, self.total_spent)
    }
}

/// Users ranked by total spending, highest first.
pub fn top_spenders(database: &Path, limit: u32) -> StoreResult<Vec<Spender>> {
    let store = SqliteStore::open_read_only(database)?;
    let mut stmt = store.connection().prepare(TOP_SPENDERS_SQL)?;
    let spenders = stmt
        .query_map(params![i64::from(limit)], |row| {
            Ok(Spender {
                name: row.get(0)?,
                total_spent: Money::from_f64(row.get(1)?).map_err(|err| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Real, Box::new(err))
                })?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = spenders.len(), limit, "report query finished");
    Ok(spenders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_two_decimal_amount() {
        let spender = Spender {
            name: "Ada Lovelace".to_string(),
            total_spent: Money::from_cents(123_450),
        };
        assert_eq!(spender.to_string(), "Ada Lovelace: $1234.50");
    }
}
