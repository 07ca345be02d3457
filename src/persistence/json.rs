use super::{Persistence, PersistenceError};
use crate::ledger::{Account, Amount, CardId, Record};
use crate::vault::{NoteBundle, PaperTank, Vault};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// I have snapshot types because I don't want to serialise my domain types
// directly: the on-disk layout is a compatibility surface, and the domain
// types should be free to evolve without silently changing it.
// This also keeps the domain types free of storage concerns: the snapshot
// makes no assumption on how accounts are actually used.
#[derive(Debug, Serialize, Deserialize)]
struct AccountSnapshot {
    card: CardId,
    pin: String,
    balance: Amount,
    expires: NaiveDate,
    daily_limit: Amount,
    daily_used: Amount,
    last_withdrawal: NaiveDate,
    #[serde(default)]
    history: Vec<Record>,
}

impl From<&Account> for AccountSnapshot {
    fn from(account: &Account) -> Self {
        Self {
            card: account.card.clone(),
            pin: account.pin.clone(),
            balance: account.balance,
            expires: account.expires,
            daily_limit: account.daily_limit,
            daily_used: account.daily_used,
            last_withdrawal: account.last_withdrawal,
            history: account.history.clone(),
        }
    }
}

impl From<AccountSnapshot> for Account {
    fn from(snapshot: AccountSnapshot) -> Self {
        Self {
            card: snapshot.card,
            pin: snapshot.pin,
            balance: snapshot.balance,
            expires: snapshot.expires,
            daily_limit: snapshot.daily_limit,
            daily_used: snapshot.daily_used,
            last_withdrawal: snapshot.last_withdrawal,
            history: snapshot.history,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct VaultSnapshot {
    count100: u32,
    count50: u32,
    count20: u32,
    firmware: String,
    paper: u32,
    ink: u8,
}

impl From<&Vault> for VaultSnapshot {
    fn from(vault: &Vault) -> Self {
        let notes = vault.notes();
        Self {
            count100: notes.hundreds,
            count50: notes.fifties,
            count20: notes.twenties,
            firmware: vault.firmware().to_string(),
            paper: vault.paper_sheets(),
            ink: vault.ink_level(),
        }
    }
}

impl From<VaultSnapshot> for Vault {
    fn from(snapshot: VaultSnapshot) -> Self {
        let mut vault = Vault::new(
            NoteBundle::new(snapshot.count100, snapshot.count50, snapshot.count20),
            snapshot.firmware,
            PaperTank::new(snapshot.paper),
        );
        vault.set_ink_level(snapshot.ink);
        vault
    }
}

/// Snapshot store backed by one JSON file per account plus a vault file,
/// all under a single state directory.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn account_path(&self, card: &str) -> PathBuf {
        self.dir.join(format!("account-{}.json", card))
    }

    fn vault_path(&self) -> PathBuf {
        self.dir.join("vault.json")
    }

    fn read<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

impl Persistence for JsonStore {
    fn load_account(&self, card: &str) -> Result<Option<Account>, PersistenceError> {
        let snapshot: Option<AccountSnapshot> = Self::read(&self.account_path(card))?;
        Ok(snapshot.map(Account::from))
    }

    fn save_account(&mut self, account: &Account) -> Result<(), PersistenceError> {
        self.write(
            &self.account_path(account.card()),
            &AccountSnapshot::from(account),
        )
    }

    fn load_vault(&self) -> Result<Option<Vault>, PersistenceError> {
        let snapshot: Option<VaultSnapshot> = Self::read(&self.vault_path())?;
        Ok(snapshot.map(Vault::from))
    }

    fn save_vault(&mut self, vault: &Vault) -> Result<(), PersistenceError> {
        self.write(&self.vault_path(), &VaultSnapshot::from(vault))
    }
}
