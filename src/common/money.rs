use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::error::AmountError;
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A monetary quantity stored as a fixed-point integer with 4 decimal places.
///
/// Requests may arrive with fractional parts (e.g. `0.5`), which an ATM can
/// never pay out. Keeping the fraction instead of truncating it lets the
/// machine reject such requests explicitly.
///
/// # Examples
/// ```
/// use atm_dispenser::common::money::Amount;
///
/// let amount = Amount::new(5000); // Represents 0.5000
/// assert_eq!(amount.whole_units(), None);
/// assert_eq!(Amount::from_units(20).unwrap().whole_units(), Some(20));
/// assert_eq!(amount.to_string_4dp(), "0.5000");
/// ```
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Amount of `units` whole currency units (one unit is one zloty, one euro...).
    pub fn from_units(units: i64) -> Result<Self, AmountError> {
        units
            .checked_mul(SCALE)
            .map(Amount)
            .ok_or(AmountError::TooLarge(units))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the amount in whole units, or `None` if it carries a fraction.
    pub fn whole_units(&self) -> Option<i64> {
        if self.0 % SCALE == 0 {
            Some(self.0 / SCALE)
        } else {
            None
        }
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Amount {
    type Err = ParseBigDecimalError;

    /// Parses a decimal amount. Input finer than 4 decimal places is rejected
    /// rather than rounded, so `9.99995` never turns into `10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = bd * BigDecimal::from(SCALE);
        let whole = scaled.with_scale(0);
        if whole != scaled {
            return Err(ParseBigDecimalError::Other(
                "more than 4 decimal places".into(),
            ));
        }
        let value: i64 = whole
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

/// ISO 4217 currencies the machine knows banknotes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Polish zloty
    Pln,
    /// Euro
    Eur,
    /// US dollar
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pln => "PLN",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount paired with the currency it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    pub amount: Amount,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn from_units(units: i64, currency: Currency) -> Result<Self, AmountError> {
        Ok(Self::new(Amount::from_units(units)?, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
