use crate::{
    common::error::AmountError,
    domain::{deposit::BanknotesPack, deposit::MoneyDeposit, withdrawal::Withdrawal},
};

/// Notes chosen to pay out an amount, highest denomination first.
/// Denominations that were not used are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown(Vec<BanknotesPack>);

impl Breakdown {
    pub fn packs(&self) -> &[BanknotesPack] {
        &self.0
    }

    pub fn total_value(&self) -> u64 {
        self.0.iter().map(BanknotesPack::value).sum()
    }

    pub fn into_withdrawal(self) -> Withdrawal {
        Withdrawal::create(self.0)
    }
}

/// Splits `units` into banknotes available in `deposit`.
///
/// Greedy: for each denomination from the highest down, take as many notes as
/// fit in the remaining amount and are present in the deposit. There is no
/// backtracking, so an amount that only a non-greedy combination could pay is
/// reported as [`AmountError::Unsatisfiable`]. The deposit is only read.
///
/// # Examples
///
/// ```
/// use atm_dispenser::common::money::Currency;
/// use atm_dispenser::domain::banknote::Banknote;
/// use atm_dispenser::domain::deposit::{BanknotesPack, MoneyDeposit};
/// use atm_dispenser::worker::allocator::allocate;
///
/// let deposit = MoneyDeposit::create(
///     Currency::Pln,
///     vec![BanknotesPack::create(100, Banknote::PL_10)],
/// )
/// .unwrap();
///
/// let breakdown = allocate(100, &deposit).unwrap();
/// assert_eq!(breakdown.packs(), &[BanknotesPack::create(10, Banknote::PL_10)]);
/// ```
pub fn allocate(units: u64, deposit: &MoneyDeposit) -> Result<Breakdown, AmountError> {
    if !deposit.can_cover(units) {
        return Err(AmountError::Unsatisfiable {
            units,
            remaining: units,
        });
    }

    let mut remaining = units;
    let mut packs = Vec::new();

    for available in deposit.packs() {
        if remaining == 0 {
            break;
        }
        let face = u64::from(available.banknote.value());
        let wanted = remaining / face;
        let taken = wanted.min(u64::from(available.count));
        if taken == 0 {
            continue;
        }
        remaining -= taken * face;
        // taken <= available.count, which is a u32
        packs.push(BanknotesPack::create(taken as u32, available.banknote));
    }

    if remaining != 0 {
        return Err(AmountError::Unsatisfiable { units, remaining });
    }

    Ok(Breakdown(packs))
}
