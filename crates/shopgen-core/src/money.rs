use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Decimal places kept for every amount.
pub const MONEY_SCALE: u32 = 2;

/// Monetary amount with cent precision, backed by [`Decimal`].
///
/// Sums and `unit price * quantity` products are exact, so a two-decimal
/// rendering of a derived total never drifts from its parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MONEY_SCALE))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Multiply by an item quantity, rounded to the cent.
    pub fn times(self, quantity: u32) -> Money {
        Money((self.0 * Decimal::from(quantity)).round_dp(MONEY_SCALE))
    }

    /// Round a float amount read back from storage to the nearest cent.
    pub fn from_f64(value: f64) -> Result<Money> {
        Decimal::from_f64_retain(value)
            .map(|amount| Money(amount.round_dp(MONEY_SCALE)))
            .ok_or_else(|| Error::InvalidMoney(value.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let amount = Decimal::from_str(value.trim())
            .map_err(|_| Error::InvalidMoney(value.to_string()))?;
        if amount.scale() > MONEY_SCALE {
            return Err(Error::InvalidMoney(value.to_string()));
        }
        Ok(Money(amount))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
