use super::account::{Account, LedgerError};

const MIN_PIN_LENGTH: usize = 4;

impl Account {
    /// Compare an entered PIN against the stored secret.
    pub fn verify_pin(&self, input: &str) -> bool {
        self.pin == input
    }

    /// Replace the stored PIN.
    ///
    /// The secret is stored as entered; hashing it is explicitly out of
    /// scope for this terminal model. It stays out of logs and debug output.
    pub fn set_pin(&mut self, new_pin: &str) -> Result<(), LedgerError> {
        if new_pin.chars().count() < MIN_PIN_LENGTH {
            return Err(LedgerError::InvalidPinFormat);
        }

        self.pin = new_pin.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod pin_tests {
    use crate::ledger::{Account, LedgerError};

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn account() -> Account {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        Account::new("4532123456789012".to_string(), "1234", dec!(100), today)
    }

    #[test]
    fn test_verify_pin() {
        let acc = account();

        assert!(acc.verify_pin("1234"));
        assert!(!acc.verify_pin("4321"));
        assert!(!acc.verify_pin(""));
    }

    #[test]
    fn test_set_pin_replaces_the_secret() {
        let mut acc = account();

        assert_eq!(Ok(()), acc.set_pin("98765"));
        assert!(acc.verify_pin("98765"));
        assert!(!acc.verify_pin("1234"));
    }

    #[test]
    fn test_set_pin_rejects_short_pins() {
        for short in vec!["", "1", "123"] {
            let mut acc = account();

            let got = acc.set_pin(short);
            assert_eq!(Err(LedgerError::InvalidPinFormat), got, "pin {:?}", short);
            assert!(acc.verify_pin("1234"), "old pin must survive");
        }
    }
}
