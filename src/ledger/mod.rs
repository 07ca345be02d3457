//! Per-account balances, fees and transaction history.
//!
//! Account: balance, rolling daily withdrawal usage and append-only history.
//! Record: one immutable line of that history.

pub mod account;
pub mod history;

pub use account::{Account, LedgerError};
pub use history::{Record, TransactionKind};

use rust_decimal_macros::dec;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when loading an account:
// (1) fn load_account(card: &str)
// (2) fn load_account(card: &CardId)
// Implementation (1) could be any string; implementation (2) is
// self-explanatory. Besides, maintenance is easier: changing card ids e.g.
// to a dedicated newtype is trivial.
pub type CardId = String;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;

/// Flat fee debited on top of every withdrawal.
pub const WITHDRAWAL_FEE: Amount = dec!(2.50);

/// Flat fee debited on top of every outgoing transfer. Deliberately distinct
/// from the withdrawal fee.
pub const TRANSFER_FEE: Amount = dec!(1.00);

/// Rolling daily withdrawal cap applied to new accounts.
pub const DEFAULT_DAILY_LIMIT: Amount = dec!(500);
