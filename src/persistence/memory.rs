use super::{Persistence, PersistenceError};
use crate::ledger::{Account, CardId};
use crate::vault::Vault;

use std::collections::HashMap;
use std::io;

/// In-memory snapshot store.
///
/// Used by the benchmarks and by tests that need a gateway without touching
/// the filesystem. `fail_saves` turns every save into an i/o error, to
/// exercise the committed-but-not-durable path.
#[derive(Default, Clone)]
pub struct MemoryStore {
    accounts: HashMap<CardId, Account>,
    vault: Option<Vault>,
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io(io::Error::new(
                io::ErrorKind::Other,
                "memory store configured to fail saves",
            )));
        }
        Ok(())
    }
}

impl Persistence for MemoryStore {
    fn load_account(&self, card: &str) -> Result<Option<Account>, PersistenceError> {
        Ok(self.accounts.get(card).cloned())
    }

    fn save_account(&mut self, account: &Account) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.accounts
            .insert(account.card().to_string(), account.clone());
        Ok(())
    }

    fn load_vault(&self) -> Result<Option<Vault>, PersistenceError> {
        Ok(self.vault.clone())
    }

    fn save_vault(&mut self, vault: &Vault) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.vault = Some(vault.clone());
        Ok(())
    }
}
