use crate::{
    common::money::Currency,
    domain::{banknote::Banknote, deposit::BanknotesPack},
};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the manifest headers.
struct CassetteRow {
    denomination: u32,
    // blank when the cassette slot is fitted but not yet filled
    count: Option<u32>,
}

/// Reads a cassette-load manifest from a CSV reader.
///
/// Supported headers: `denomination,count`.
/// Every denomination must exist for `currency`; a missing count is an error
/// carrying the denomination as context.
///
/// # Examples
///
/// ```
/// use atm_dispenser::common::money::Currency;
/// use atm_dispenser::domain::banknote::Banknote;
/// use atm_dispenser::io::reader::read_cassettes;
/// use csv::ReaderBuilder;
///
/// let data = "denomination,count\n\
/// 100,40\n\
/// 10,200\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let packs: Vec<_> = read_cassettes(&mut rdr, Currency::Pln).collect();
///
/// assert_eq!(packs[0].as_ref().unwrap().banknote, Banknote::PL_100);
/// assert_eq!(packs[1].as_ref().unwrap().count, 200);
/// ```
pub fn read_cassettes<R: Read>(
    rdr: &mut csv::Reader<R>,
    currency: Currency,
) -> impl Iterator<Item = Result<BanknotesPack, String>> + '_ {
    rdr.deserialize::<CassetteRow>().map(move |res| {
        let row = res.map_err(|e| e.to_string())?;

        let banknote = Banknote::of(currency, row.denomination).ok_or_else(|| {
            format!("unknown denomination {} for {currency}", row.denomination)
        })?;
        let count = row.count.ok_or_else(|| {
            format!("cassette {} {currency} missing count", row.denomination)
        })?;

        Ok(BanknotesPack::create(count, banknote))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    // Helper: parse CSV input into collected packs for assertions.
    fn collect_packs(input: &str, currency: Currency) -> Vec<Result<BanknotesPack, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());
        read_cassettes(&mut reader, currency).collect()
    }

    #[test]
    fn parses_every_row_in_order() {
        let data = "denomination,count\n500,2\n200, 2\n10,3\n";
        let packs = collect_packs(data, Currency::Pln);

        assert_eq!(
            packs,
            vec![
                Ok(BanknotesPack::create(2, Banknote::PL_500)),
                Ok(BanknotesPack::create(2, Banknote::PL_200)),
                Ok(BanknotesPack::create(3, Banknote::PL_10)),
            ]
        );
    }

    #[test]
    fn reports_unknown_denomination_error() {
        let data = "denomination,count\n5,10\n";
        let packs = collect_packs(data, Currency::Pln);

        assert_eq!(packs.len(), 1);
        let err = packs.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "unknown denomination 5 for PLN");
    }

    #[test]
    fn reports_missing_count_error() {
        let data = "denomination,count\n20,\n";
        let packs = collect_packs(data, Currency::Pln);

        let err = packs.into_iter().next().unwrap().unwrap_err();
        assert_eq!(err, "cassette 20 PLN missing count");
    }

    #[test]
    fn reports_malformed_rows() {
        let data = "denomination,count\nlots,1\n";
        let packs = collect_packs(data, Currency::Eur);

        assert!(packs[0].is_err());
    }
}
