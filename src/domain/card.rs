use crate::common::error::CredentialError;

/// Payment card presented to the machine. Only the number is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    number: String,
}

impl Card {
    pub fn create(number: impl Into<String>) -> Result<Self, CredentialError> {
        let number = number.into();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CredentialError::InvalidCardNumber);
        }
        Ok(Self { number })
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Four digit PIN as typed on the keypad.
#[derive(Clone, PartialEq, Eq)]
pub struct PinCode {
    digits: [u8; 4],
}

impl PinCode {
    pub fn create(d1: u8, d2: u8, d3: u8, d4: u8) -> Result<Self, CredentialError> {
        let digits = [d1, d2, d3, d4];
        if let Some(bad) = digits.iter().find(|d| **d > 9) {
            return Err(CredentialError::InvalidPinDigit(*bad));
        }
        Ok(Self { digits })
    }

    /// The PIN as the bank expects it, e.g. `"1234"`.
    pub fn pin(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

// keep the PIN out of logs
impl std::fmt::Debug for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PinCode(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_renders_digits_in_order() {
        let pin = PinCode::create(1, 2, 3, 4).unwrap();
        assert_eq!(pin.pin(), "1234");
        assert_eq!(format!("{pin:?}"), "PinCode(****)");
    }

    #[test]
    fn pin_rejects_non_digits() {
        assert_eq!(
            PinCode::create(1, 2, 10, 4).unwrap_err(),
            CredentialError::InvalidPinDigit(10)
        );
    }

    #[test]
    fn card_number_must_be_digits() {
        assert_eq!(Card::create("123456789").unwrap().number(), "123456789");
        assert!(Card::create("").is_err());
        assert!(Card::create("1234-5678").is_err());
    }
}
