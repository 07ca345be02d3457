use super::Amount;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// What a history line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Withdrawal,
    Deposit,
    TransferOut,
    TransferIn,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Withdrawal => "WITHDRAWAL",
            Self::Deposit => "DEPOSIT",
            Self::TransferOut => "TRANSFER_OUT",
            Self::TransferIn => "TRANSFER_IN",
        };
        f.write_str(label)
    }
}

/// One line of an account's transaction history.
///
/// Records are immutable once appended, and the insertion order is the
/// chronological order. This is a pure data carrier with no invariants of its
/// own, so it serialises directly instead of going through a snapshot type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Amount,
    #[serde(rename = "balance")]
    pub balance_after: Amount,
    pub timestamp: NaiveDateTime,
    pub detail: String,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} | Amount: ${} | Balance: ${} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.balance_after,
            self.detail
        )
    }
}
