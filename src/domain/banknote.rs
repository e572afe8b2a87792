use std::fmt;

use crate::common::money::Currency;

/// Face values per currency, highest first. Dispensing walks this order.
const CATALOG: &[(Currency, &[u32])] = &[
    (Currency::Pln, &[500, 200, 100, 50, 20, 10]),
    (Currency::Eur, &[500, 200, 100, 50, 20, 10, 5]),
    (Currency::Usd, &[100, 50, 20, 10, 5, 2, 1]),
];

/// A banknote face value of a given currency.
///
/// Values can only be obtained from the catalog, so every `Banknote` in the
/// program is one the machine knows how to dispense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Banknote {
    currency: Currency,
    value: u32,
}

impl Banknote {
    pub const PL_10: Banknote = Banknote::pln(10);
    pub const PL_20: Banknote = Banknote::pln(20);
    pub const PL_50: Banknote = Banknote::pln(50);
    pub const PL_100: Banknote = Banknote::pln(100);
    pub const PL_200: Banknote = Banknote::pln(200);
    pub const PL_500: Banknote = Banknote::pln(500);

    const fn pln(value: u32) -> Self {
        Self {
            currency: Currency::Pln,
            value,
        }
    }

    /// Looks up the banknote with face `value` in `currency`.
    pub fn of(currency: Currency, value: u32) -> Option<Banknote> {
        face_values(currency)
            .iter()
            .any(|v| *v == value)
            .then_some(Banknote { currency, value })
    }

    /// All banknotes of `currency`, ordered by descending face value.
    pub fn catalog(currency: Currency) -> Vec<Banknote> {
        face_values(currency)
            .iter()
            .map(|&value| Banknote { currency, value })
            .collect()
    }

    pub fn smallest(currency: Currency) -> Option<Banknote> {
        face_values(currency)
            .last()
            .map(|&value| Banknote { currency, value })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

fn face_values(currency: Currency) -> &'static [u32] {
    CATALOG
        .iter()
        .find(|(c, _)| *c == currency)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}
