//! Durable load/save of account and vault snapshots.
//!
//! This is a local state-durability boundary, not a wire protocol: the teller
//! only needs to put state somewhere it can find it again after a restart.

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::ledger::Account;
use crate::vault::Vault;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot exists but cannot be decoded. Distinct from a missing
    /// snapshot, which is not an error.
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where snapshots live.
///
/// `load_account` answers `None` for unknown cards: whether an unknown card
/// is rejected or provisioned with a default account is a policy decision
/// that belongs to the teller, not to the storage layer.
///
/// Saves are expected to be durable on `Ok`; a failed save is reported to
/// the caller, which decides whether that degrades the operation or merely
/// its durability guarantee.
pub trait Persistence {
    fn load_account(&self, card: &str) -> Result<Option<Account>, PersistenceError>;
    fn save_account(&mut self, account: &Account) -> Result<(), PersistenceError>;

    fn load_vault(&self) -> Result<Option<Vault>, PersistenceError>;
    fn save_vault(&mut self, vault: &Vault) -> Result<(), PersistenceError>;
}
