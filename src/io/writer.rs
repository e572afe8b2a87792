use std::io::{self, Write};

use crate::{
    common::money::{Amount, Currency},
    domain::{deposit::BanknotesPack, deposit::MoneyDeposit, withdrawal::Withdrawal},
};

#[derive(serde::Serialize)]
/// Internal CSV output row.
///
/// Headers written (in this order): `currency,denomination,count,value`.
/// `value` is the face value of the whole pack, formatted to 4 decimal places.
struct PackRow {
    currency: Currency,
    denomination: u32,
    count: u32,
    value: String,
}

/// Writes the per-denomination contents of a deposit, highest face value first.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use atm_dispenser::common::money::Currency;
/// use atm_dispenser::domain::deposit::MoneyDeposit;
/// use atm_dispenser::io::writer::write_deposit;
///
/// let mut out = Vec::new();
/// write_deposit(&mut out, &MoneyDeposit::empty(Currency::Pln)).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("currency,denomination,count,value\n"));
/// assert!(s.contains("\nPLN,500,0,0.0000\n"));
/// ```
pub fn write_deposit<W: Write>(writer: W, deposit: &MoneyDeposit) -> Result<(), csv::Error> {
    write_packs(writer, deposit.packs())
}

/// Writes the notes of a withdrawal as a dispense receipt.
///
/// Each row is labelled with the currency of its banknote.
pub fn write_withdrawal<W: Write>(writer: W, withdrawal: &Withdrawal) -> Result<(), csv::Error> {
    write_packs(writer, withdrawal.packs())
}

fn write_packs<W: Write>(writer: W, packs: &[BanknotesPack]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut packs = packs.to_vec();
    packs.sort_by(|a, b| b.banknote.value().cmp(&a.banknote.value()));

    for pack in packs {
        let value = i64::try_from(pack.value())
            .ok()
            .and_then(|units| Amount::from_units(units).ok())
            .ok_or_else(|| io::Error::other(format!("pack value overflow for {}", pack.banknote)))?;
        let row = PackRow {
            currency: pack.banknote.currency(),
            denomination: pack.banknote.value(),
            count: pack.count,
            value: value.to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
