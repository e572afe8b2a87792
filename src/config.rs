//! Machine configuration.

use serde::Deserialize;

use crate::{
    common::{error::DepositError, money::Currency},
    domain::{
        banknote::Banknote,
        deposit::{BanknotesPack, MoneyDeposit},
    },
};

/// Configuration a machine is started with.
#[derive(Debug, Clone, Deserialize)]
pub struct AtmConfig {
    /// Currency the machine pays out.
    pub currency: Currency,
    /// Notes loaded at start-up. Denominations not listed start empty.
    #[serde(default)]
    pub cassettes: Vec<CassetteConfig>,
}

/// One cassette: a face value and how many notes it holds.
#[derive(Debug, Clone, Deserialize)]
pub struct CassetteConfig {
    pub denomination: u32,
    pub count: u32,
}

impl AtmConfig {
    /// Loads `config/atm.toml` (if present) and `ATM__*` environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/atm").required(false))
            .add_source(config::Environment::with_prefix("ATM").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Deposit described by `cassettes`.
    pub fn initial_deposit(&self) -> Result<MoneyDeposit, DepositError> {
        let packs = self
            .cassettes
            .iter()
            .map(|c| {
                Banknote::of(self.currency, c.denomination)
                    .map(|note| BanknotesPack::create(c.count, note))
                    .ok_or(DepositError::UnknownDenomination {
                        value: c.denomination,
                        currency: self.currency,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        MoneyDeposit::create(self.currency, packs)
    }
}
