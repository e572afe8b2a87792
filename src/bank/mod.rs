use std::sync::Arc;

use crate::{
    common::money::Money,
    domain::card::{Card, PinCode},
};

pub mod stub;

/// Opaque proof from the bank that a PIN/card pair was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    pub fn create(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("authorization rejected: {0}")]
pub struct AuthorizationError(pub String);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("account operation rejected: {0}")]
pub struct AccountError(pub String);

/// Banking backend the machine delegates card checks and account charges to.
///
/// Calls block until the bank answers. Timeouts and retries are the
/// implementation's business; the machine treats any error as final.
pub trait Bank {
    /// Validates `pin` for `card` and issues a token for a later charge.
    fn authorize(&self, pin: &PinCode, card: &Card) -> Result<AuthorizationToken, AuthorizationError>;

    /// Debits `money` from the account behind `token`.
    fn charge(&self, token: &AuthorizationToken, money: &Money) -> Result<(), AccountError>;
}

impl<B: Bank + ?Sized> Bank for &B {
    fn authorize(&self, pin: &PinCode, card: &Card) -> Result<AuthorizationToken, AuthorizationError> {
        (**self).authorize(pin, card)
    }

    fn charge(&self, token: &AuthorizationToken, money: &Money) -> Result<(), AccountError> {
        (**self).charge(token, money)
    }
}

impl<B: Bank + ?Sized> Bank for Arc<B> {
    fn authorize(&self, pin: &PinCode, card: &Card) -> Result<AuthorizationToken, AuthorizationError> {
        (**self).authorize(pin, card)
    }

    fn charge(&self, token: &AuthorizationToken, money: &Money) -> Result<(), AccountError> {
        (**self).charge(token, money)
    }
}
