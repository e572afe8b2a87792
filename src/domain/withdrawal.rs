use crate::domain::{banknote::Banknote, deposit::BanknotesPack};

/// Banknotes handed out to the customer by one successful withdrawal.
///
/// Holds its own copy of the packs; it is not tied to the deposit it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    packs: Vec<BanknotesPack>,
}

impl Withdrawal {
    pub fn create(packs: Vec<BanknotesPack>) -> Self {
        Self { packs }
    }

    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    pub fn count_of(&self, banknote: Banknote) -> u32 {
        self.packs
            .iter()
            .filter(|p| p.banknote == banknote)
            .map(|p| p.count)
            .sum()
    }

    pub fn total_value(&self) -> u64 {
        self.packs.iter().map(BanknotesPack::value).sum()
    }
}
