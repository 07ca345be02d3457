use crate::ledger::{history::TransactionKind, Amount};

use super::account::{Account, LedgerError};

impl Account {
    /// Credit `amount` to the balance. Deposits carry no fee and do not touch
    /// the daily withdrawal window.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        self.record(
            TransactionKind::Deposit,
            amount,
            "Deposit successful".to_string(),
        );
        Ok(())
    }
}
