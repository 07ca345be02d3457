use crate::ledger::{history::TransactionKind, Amount, WITHDRAWAL_FEE};

use super::account::{Account, LedgerError};
use chrono::NaiveDate;

impl Account {
    /// Debit `amount` plus the withdrawal fee, counting `amount` against the
    /// rolling daily limit.
    ///
    /// The daily window is keyed on the calendar date: the first withdrawal
    /// on a later date than the last one resets the usage before checking
    /// the limit. Note that only the amount counts against the limit, while
    /// amount plus fee must be covered by the balance.
    pub fn withdraw(&mut self, amount: Amount, today: NaiveDate) -> Result<(), LedgerError> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        if self.last_withdrawal < today {
            self.daily_used = Amount::ZERO;
            self.last_withdrawal = today;
        }

        if self.daily_used + amount > self.daily_limit {
            return Err(LedgerError::DailyLimitExceeded);
        }

        let total = amount + WITHDRAWAL_FEE;
        if total > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        self.balance -= total;
        self.daily_used += amount;
        self.record(
            TransactionKind::Withdrawal,
            amount,
            format!("Withdrawal fee: ${}", WITHDRAWAL_FEE),
        );
        Ok(())
    }
}
