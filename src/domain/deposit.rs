use crate::{
    common::{error::DepositError, money::Currency},
    domain::banknote::Banknote,
};

/// A number of banknotes of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanknotesPack {
    pub banknote: Banknote,
    pub count: u32,
}

impl BanknotesPack {
    pub fn create(count: u32, banknote: Banknote) -> Self {
        Self { banknote, count }
    }

    /// Face value of the whole pack.
    pub fn value(&self) -> u64 {
        u64::from(self.banknote.value()) * u64::from(self.count)
    }
}

/// Physical cash inventory of the machine, one pack per catalog denomination.
///
/// Packs are kept in catalog order (descending face value). Two deposits are
/// equal when they hold the same currency and the same count per denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyDeposit {
    currency: Currency,
    packs: Vec<BanknotesPack>,
}

impl MoneyDeposit {
    /// Builds a deposit from `packs`; denominations not listed get a count of zero.
    pub fn create(currency: Currency, packs: Vec<BanknotesPack>) -> Result<Self, DepositError> {
        let mut deposit = Self::empty(currency);
        let mut seen = Vec::with_capacity(packs.len());

        for pack in packs {
            let note = pack.banknote;
            if note.currency() != currency {
                return Err(DepositError::CurrencyMismatch {
                    banknote: note.currency(),
                    deposit: currency,
                });
            }
            if seen.contains(&note) {
                return Err(DepositError::DuplicateDenomination {
                    value: note.value(),
                    currency,
                });
            }
            seen.push(note);

            if let Some(slot) = deposit.packs.iter_mut().find(|p| p.banknote == note) {
                slot.count = pack.count;
            }
        }

        Ok(deposit)
    }

    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            packs: Banknote::catalog(currency)
                .into_iter()
                .map(|note| BanknotesPack::create(0, note))
                .collect(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    pub fn total_value(&self) -> u64 {
        self.packs.iter().map(BanknotesPack::value).sum()
    }

    pub fn count_of(&self, banknote: Banknote) -> u32 {
        self.packs
            .iter()
            .find(|p| p.banknote == banknote)
            .map_or(0, |p| p.count)
    }

    /// Quick upper bound: false when the whole deposit is worth less than `units`.
    pub fn can_cover(&self, units: u64) -> bool {
        self.total_value() >= units
    }

    /// Removes the notes in `breakdown` from the deposit.
    ///
    /// # Panics
    ///
    /// Panics if the deposit holds fewer notes of some denomination than the
    /// breakdown asks for. Breakdowns come from the allocator, which only
    /// returns what the deposit can pay, so this indicates a bug. Every entry
    /// is checked before any count changes, so a panic leaves the deposit intact.
    pub fn apply_withdrawal(&mut self, breakdown: &[BanknotesPack]) {
        for taken in breakdown {
            let requested: u64 = breakdown
                .iter()
                .filter(|p| p.banknote == taken.banknote)
                .map(|p| u64::from(p.count))
                .sum();
            let available = self.count_of(taken.banknote);
            assert!(
                u64::from(available) >= requested,
                "withdrawal of {} x {} exceeds deposit ({} available)",
                requested,
                taken.banknote,
                available
            );
        }

        for taken in breakdown {
            if let Some(slot) = self.packs.iter_mut().find(|p| p.banknote == taken.banknote) {
                slot.count -= taken.count;
            }
        }
    }
}
