use std::fmt;

use crate::common::money::{Amount, Currency};

/// Caller-visible classification of a failed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    WrongCurrency,
    WrongAmount,
    Authorization,
    NoFundsOnAccount,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WrongCurrency => "WRONG_CURRENCY",
            Self::WrongAmount => "WRONG_AMOUNT",
            Self::Authorization => "AUTHORIZATION",
            Self::NoFundsOnAccount => "NO_FUNDS_ON_ACCOUNT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a requested amount cannot be paid out.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must be positive, got {0}")]
    NotPositive(Amount),
    #[error("amount of {0} units is too large")]
    TooLarge(i64),
    #[error("amount {0} has a fractional part")]
    Fractional(Amount),
    #[error("no banknotes are defined for {0}")]
    NoDenominations(Currency),
    #[error("amount {units} is not a multiple of the smallest banknote {smallest}")]
    NotMultipleOfSmallest { units: u64, smallest: u32 },
    #[error("deposit cannot pay out {units}: {remaining} left after exhausting banknotes")]
    Unsatisfiable { units: u64, remaining: u64 },
}

/// Failure of a single withdrawal attempt. Always carries exactly one [`ErrorCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error("requested currency {requested} does not match machine currency {machine}")]
    WrongCurrency {
        requested: Currency,
        machine: Currency,
    },
    #[error("wrong amount: {0}")]
    WrongAmount(#[from] AmountError),
    #[error("authorization failed: {0}")]
    Authorization(String),
    #[error("account charge rejected: {0}")]
    NoFundsOnAccount(String),
}

impl WithdrawalError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::WrongCurrency { .. } => ErrorCode::WrongCurrency,
            Self::WrongAmount(_) => ErrorCode::WrongAmount,
            Self::Authorization(_) => ErrorCode::Authorization,
            Self::NoFundsOnAccount(_) => ErrorCode::NoFundsOnAccount,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DepositError {
    #[error("banknote {banknote} does not belong to deposit currency {deposit}")]
    CurrencyMismatch { banknote: Currency, deposit: Currency },
    #[error("duplicate pack for denomination {value} {currency}")]
    DuplicateDenomination { value: u32, currency: Currency },
    #[error("no {value} {currency} banknote exists")]
    UnknownDenomination { value: u32, currency: Currency },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("pin digit must be between 0 and 9, got {0}")]
    InvalidPinDigit(u8),
    #[error("card number must be a non-empty string of digits")]
    InvalidCardNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_withdrawal_error_maps_to_one_code() {
        let cases = [
            (
                WithdrawalError::WrongCurrency {
                    requested: Currency::Usd,
                    machine: Currency::Pln,
                },
                ErrorCode::WrongCurrency,
            ),
            (
                WithdrawalError::WrongAmount(AmountError::Fractional(Amount::new(5000))),
                ErrorCode::WrongAmount,
            ),
            (
                WithdrawalError::WrongAmount(AmountError::Unsatisfiable {
                    units: 60,
                    remaining: 10,
                }),
                ErrorCode::WrongAmount,
            ),
            (
                WithdrawalError::Authorization("bad pin".into()),
                ErrorCode::Authorization,
            ),
            (
                WithdrawalError::NoFundsOnAccount("balance too low".into()),
                ErrorCode::NoFundsOnAccount,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code, "{err}");
        }
    }

    #[test]
    fn error_codes_render_as_constants() {
        assert_eq!(ErrorCode::WrongCurrency.to_string(), "WRONG_CURRENCY");
        assert_eq!(ErrorCode::WrongAmount.to_string(), "WRONG_AMOUNT");
        assert_eq!(ErrorCode::Authorization.to_string(), "AUTHORIZATION");
        assert_eq!(ErrorCode::NoFundsOnAccount.to_string(), "NO_FUNDS_ON_ACCOUNT");
    }

    #[test]
    fn display_includes_context() {
        let err = WithdrawalError::WrongCurrency {
            requested: Currency::Usd,
            machine: Currency::Pln,
        };
        assert_eq!(
            err.to_string(),
            "requested currency USD does not match machine currency PLN"
        );

        let err = WithdrawalError::from(AmountError::NotMultipleOfSmallest {
            units: 15,
            smallest: 10,
        });
        assert_eq!(
            err.to_string(),
            "wrong amount: amount 15 is not a multiple of the smallest banknote 10"
        );
    }
}
