use tracing::{debug, info, warn};

use crate::{
    bank::Bank,
    common::{
        error::{AmountError, DepositError, WithdrawalError},
        money::{Currency, Money},
    },
    config::AtmConfig,
    domain::{
        banknote::Banknote,
        card::{Card, PinCode},
        deposit::MoneyDeposit,
        withdrawal::Withdrawal,
    },
    worker::allocator::allocate,
};

/// Cash machine for a single currency.
///
/// Owns the physical deposit and drives one withdrawal at a time through
/// validation, authorization, allocation, charge and commit. A failure at any
/// step leaves the deposit unchanged.
#[derive(Debug)]
pub struct AtMachine<B: Bank> {
    bank: B,
    currency: Currency,
    deposit: MoneyDeposit,
}

impl<B: Bank> AtMachine<B> {
    /// Machine with an empty deposit; load notes with [`AtMachine::set_deposit`].
    pub fn new(bank: B, currency: Currency) -> Self {
        Self {
            bank,
            currency,
            deposit: MoneyDeposit::empty(currency),
        }
    }

    pub fn from_config(bank: B, config: &AtmConfig) -> Result<Self, DepositError> {
        let deposit = config.initial_deposit()?;
        Ok(Self {
            bank,
            currency: config.currency,
            deposit,
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn current_deposit(&self) -> MoneyDeposit {
        self.deposit.clone()
    }

    /// Replaces the whole deposit, e.g. after cassettes were refilled.
    pub fn set_deposit(&mut self, deposit: MoneyDeposit) -> Result<(), DepositError> {
        if deposit.currency() != self.currency {
            return Err(DepositError::CurrencyMismatch {
                banknote: deposit.currency(),
                deposit: self.currency,
            });
        }
        info!(
            currency = %self.currency,
            total = deposit.total_value(),
            "deposit replaced"
        );
        self.deposit = deposit;
        Ok(())
    }

    /// Pays out `money` to the holder of `card`.
    ///
    /// The bank is asked to authorize before anything is allocated, and is
    /// charged with the token it issued only once the notes are known to be
    /// available. The deposit is updated only after a successful charge.
    pub fn withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        money: &Money,
    ) -> Result<Withdrawal, WithdrawalError> {
        let result = self.try_withdraw(pin, card, money);
        match &result {
            Ok(withdrawal) => info!(
                currency = %self.currency,
                amount = %money.amount,
                notes = withdrawal.packs().len(),
                "withdrawal completed"
            ),
            Err(e) => warn!(
                currency = %money.currency,
                amount = %money.amount,
                code = %e.code(),
                error = %e,
                "withdrawal rejected"
            ),
        }
        result
    }

    fn try_withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        money: &Money,
    ) -> Result<Withdrawal, WithdrawalError> {
        if money.currency != self.currency {
            return Err(WithdrawalError::WrongCurrency {
                requested: money.currency,
                machine: self.currency,
            });
        }
        let units = self.validate_amount(money)?;

        debug!(units, "authorizing card");
        let token = self
            .bank
            .authorize(pin, card)
            .map_err(|e| WithdrawalError::Authorization(e.to_string()))?;

        debug!(units, "allocating banknotes");
        let breakdown = allocate(units, &self.deposit)?;

        debug!(units, "charging account");
        self.bank
            .charge(&token, money)
            .map_err(|e| WithdrawalError::NoFundsOnAccount(e.to_string()))?;

        self.deposit.apply_withdrawal(breakdown.packs());
        Ok(breakdown.into_withdrawal())
    }

    /// Whole units to pay out, if the amount is something banknotes can form.
    fn validate_amount(&self, money: &Money) -> Result<u64, AmountError> {
        if !money.amount.is_positive() {
            return Err(AmountError::NotPositive(money.amount));
        }
        let units = money
            .amount
            .whole_units()
            .and_then(|u| u64::try_from(u).ok())
            .ok_or(AmountError::Fractional(money.amount))?;
        let smallest = Banknote::smallest(self.currency)
            .ok_or(AmountError::NoDenominations(self.currency))?
            .value();
        if units % u64::from(smallest) != 0 {
            return Err(AmountError::NotMultipleOfSmallest { units, smallest });
        }
        Ok(units)
    }
}
