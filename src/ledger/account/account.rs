use crate::ledger::{history::TransactionKind, Amount, CardId, Record, DEFAULT_DAILY_LIMIT};

use chrono::{Local, Months, NaiveDate};
use thiserror::Error;

/// Note: I chose to keep errors simple here.
/// The teller layer adds session context; these variants only need to stay
/// distinguishable so a rejected debit can be told apart from a limit breach.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The amount is zero or negative.
    #[error("amount must be positive")]
    InvalidAmount,

    /// The balance cannot cover the amount plus the applicable fee.
    #[error("the balance cannot cover the amount plus fees")]
    InsufficientFunds,

    /// The withdrawal would push today's usage past the daily limit.
    #[error("the daily withdrawal limit has been reached")]
    DailyLimitExceeded,

    /// A new PIN is shorter than 4 characters.
    #[error("the PIN must be at least 4 characters")]
    InvalidPinFormat,
}

/// A customer account: balance, rolling daily withdrawal usage and an
/// append-only transaction history.
///
/// Every mutation either fully applies (debit, usage bump and history line
/// together) or leaves the account untouched, so the balance never goes
/// negative and `daily_used` never exceeds the limit.
#[derive(Clone)]
pub struct Account {
    pub(crate) card: CardId,
    pub(crate) pin: String,
    pub(crate) balance: Amount,
    pub(crate) expires: NaiveDate,
    pub(crate) daily_limit: Amount,
    pub(crate) daily_used: Amount,
    pub(crate) last_withdrawal: NaiveDate,
    pub(crate) history: Vec<Record>,
}

impl Account {
    /// Open an account with the default daily limit and a card valid for
    /// five years.
    pub fn new(card: CardId, pin: impl Into<String>, balance: Amount, today: NaiveDate) -> Self {
        Self {
            card,
            pin: pin.into(),
            balance,
            expires: today
                .checked_add_months(Months::new(60))
                .expect("five years from any realistic date stays in range"),
            daily_limit: DEFAULT_DAILY_LIMIT,
            daily_used: Amount::ZERO,
            last_withdrawal: today,
            history: Vec::new(),
        }
    }

    pub fn card(&self) -> &str {
        &self.card
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn expires(&self) -> NaiveDate {
        self.expires
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expires
    }

    pub fn daily_limit(&self) -> Amount {
        self.daily_limit
    }

    pub fn daily_used(&self) -> Amount {
        self.daily_used
    }

    /// The full history, oldest first.
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// The most recent `limit` history lines, newest first.
    pub fn recent_history(&self, limit: usize) -> impl Iterator<Item = &Record> {
        self.history.iter().rev().take(limit)
    }

    /// Append a history line capturing the balance after the mutation.
    pub(super) fn record(&mut self, kind: TransactionKind, amount: Amount, detail: String) {
        self.history.push(Record {
            kind,
            amount,
            balance_after: self.balance,
            timestamp: Local::now().naive_local(),
            detail,
        });
    }
}

// The stored PIN never appears in logs or debug output.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("card", &self.card)
            .field("pin", &"****")
            .field("balance", &self.balance)
            .field("expires", &self.expires)
            .field("daily_limit", &self.daily_limit)
            .field("daily_used", &self.daily_used)
            .field("last_withdrawal", &self.last_withdrawal)
            .field("history", &self.history.len())
            .finish()
    }
}
