use crate::ledger::{history::TransactionKind, Amount, TRANSFER_FEE};

use super::account::{Account, LedgerError};

impl Account {
    /// Debit `amount` plus the transfer fee in favour of another card.
    ///
    /// Transfers are deliberately not counted against the daily withdrawal
    /// limit: the cap exists to bound physical cash leaving the terminal,
    /// and a transfer moves no cash. Do not "fix" this by adding a limit
    /// check without revisiting that model.
    pub fn transfer_out(&mut self, amount: Amount, recipient: &str) -> Result<(), LedgerError> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        let total = amount + TRANSFER_FEE;
        if total > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        self.balance -= total;
        self.record(
            TransactionKind::TransferOut,
            amount,
            format!("Transfer to: {} | Fee: ${}", recipient, TRANSFER_FEE),
        );
        Ok(())
    }

    /// Credit an incoming transfer. Always succeeds for a positive amount.
    pub fn receive_transfer(&mut self, amount: Amount, sender: &str) -> Result<(), LedgerError> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        self.record(
            TransactionKind::TransferIn,
            amount,
            format!("Transfer from: {}", sender),
        );
        Ok(())
    }
}
