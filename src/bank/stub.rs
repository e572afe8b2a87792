use std::cell::RefCell;

use super::{AccountError, AuthorizationError, AuthorizationToken, Bank};
use crate::{
    common::money::Money,
    domain::card::{Card, PinCode},
};

/// One observed call on [`StubBank`], in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankCall {
    Authorize { pin: String, card_number: String },
    Charge { token: AuthorizationToken, money: Money },
}

/// In-memory bank with scripted answers that records every call.
///
/// Public so integration tests under `tests/` can drive the machine with it.
#[derive(Debug)]
pub struct StubBank {
    authorize_result: Result<AuthorizationToken, AuthorizationError>,
    charge_result: Result<(), AccountError>,
    calls: RefCell<Vec<BankCall>>,
}

impl StubBank {
    /// Bank that accepts every card and every charge.
    pub fn approving(token: &str) -> Self {
        Self {
            authorize_result: Ok(AuthorizationToken::create(token)),
            charge_result: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting_authorization(reason: &str) -> Self {
        Self {
            authorize_result: Err(AuthorizationError(reason.to_string())),
            ..Self::approving("unused")
        }
    }

    pub fn rejecting_charge(reason: &str) -> Self {
        Self {
            charge_result: Err(AccountError(reason.to_string())),
            ..Self::approving("stub-token")
        }
    }

    pub fn calls(&self) -> Vec<BankCall> {
        self.calls.borrow().clone()
    }

    pub fn charge_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, BankCall::Charge { .. }))
            .count()
    }
}

impl Default for StubBank {
    fn default() -> Self {
        Self::approving("stub-token")
    }
}

impl Bank for StubBank {
    fn authorize(&self, pin: &PinCode, card: &Card) -> Result<AuthorizationToken, AuthorizationError> {
        self.calls.borrow_mut().push(BankCall::Authorize {
            pin: pin.pin(),
            card_number: card.number().to_string(),
        });
        self.authorize_result.clone()
    }

    fn charge(&self, token: &AuthorizationToken, money: &Money) -> Result<(), AccountError> {
        self.calls.borrow_mut().push(BankCall::Charge {
            token: token.clone(),
            money: *money,
        });
        self.charge_result.clone()
    }
}
