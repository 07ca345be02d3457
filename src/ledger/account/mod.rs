#[allow(clippy::module_inception)]
mod account;
mod deposit;
mod pin;
mod transfer;
mod withdrawal;

pub use account::{Account, LedgerError};
