//! Property-based tests for banknote allocation and withdrawal.

use proptest::prelude::*;

use super::allocator::allocate;
use super::machine::AtMachine;
use crate::{
    bank::stub::StubBank,
    common::money::{Currency, Money},
    domain::{
        banknote::Banknote,
        card::{Card, PinCode},
        deposit::{BanknotesPack, MoneyDeposit},
    },
};

/// Strategy to generate a PLN deposit with 0..50 notes per denomination.
fn pln_deposit() -> impl Strategy<Value = MoneyDeposit> {
    prop::collection::vec(0u32..50, 6).prop_map(|counts| {
        let packs = Banknote::catalog(Currency::Pln)
            .into_iter()
            .zip(counts)
            .map(|(note, count)| BanknotesPack::create(count, note))
            .collect();
        MoneyDeposit::create(Currency::Pln, packs).expect("catalog packs are valid")
    })
}

/// Strategy to generate withdrawable PLN amounts (10 to 5000, step 10).
fn pln_units() -> impl Strategy<Value = u64> {
    (1u64..=500).prop_map(|tens| tens * 10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A successful breakdown pays exactly the requested amount.
    #[test]
    fn prop_breakdown_sums_to_amount(deposit in pln_deposit(), units in pln_units()) {
        if let Ok(breakdown) = allocate(units, &deposit) {
            prop_assert_eq!(breakdown.total_value(), units);
        }
    }

    /// A breakdown never takes more notes than the deposit holds and lists
    /// denominations highest first.
    #[test]
    fn prop_breakdown_fits_deposit(deposit in pln_deposit(), units in pln_units()) {
        if let Ok(breakdown) = allocate(units, &deposit) {
            for pack in breakdown.packs() {
                prop_assert!(pack.count > 0);
                prop_assert!(pack.count <= deposit.count_of(pack.banknote));
            }
            prop_assert!(breakdown
                .packs()
                .windows(2)
                .all(|w| w[0].banknote.value() > w[1].banknote.value()));
        }
    }

    /// After a withdrawal, each denomination drops by exactly what was paid out.
    #[test]
    fn prop_withdrawal_conserves_notes(deposit in pln_deposit(), units in pln_units()) {
        let bank = StubBank::default();
        let mut atm = AtMachine::new(&bank, Currency::Pln);
        atm.set_deposit(deposit.clone()).expect("same currency");
        let pin = PinCode::create(0, 0, 0, 0).expect("valid pin");
        let card = Card::create("42").expect("valid card");
        let money = Money::from_units(units as i64, Currency::Pln).expect("small amount");

        match atm.withdraw(&pin, &card, &money) {
            Ok(withdrawal) => {
                let after = atm.current_deposit();
                for note in Banknote::catalog(Currency::Pln) {
                    prop_assert_eq!(
                        deposit.count_of(note) - withdrawal.count_of(note),
                        after.count_of(note)
                    );
                }
                prop_assert_eq!(deposit.total_value() - units, after.total_value());
            }
            Err(_) => {
                prop_assert_eq!(atm.current_deposit(), deposit);
            }
        }
    }

    /// With plenty of every note, any multiple of the smallest note is payable.
    #[test]
    fn prop_full_deposit_pays_any_multiple_of_ten(units in pln_units()) {
        let packs = Banknote::catalog(Currency::Pln)
            .into_iter()
            .map(|note| BanknotesPack::create(1_000, note))
            .collect();
        let deposit = MoneyDeposit::create(Currency::Pln, packs).expect("catalog packs are valid");

        prop_assert!(allocate(units, &deposit).is_ok());
    }
}
