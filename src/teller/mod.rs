//! The teller sequences vault and ledger operations for a customer session.
//!
//! There are no real atomic transactions here: a withdrawal touches two
//! independently-failing resources (physical cash, then the account), so the
//! teller compensates the first when the second rejects. Everything is
//! synchronous and single-session; the persistence gateway is the only wait
//! point.

pub mod deposit;
pub mod maintenance;
pub mod transfer;
pub mod withdraw;

pub use maintenance::{Technician, VaultStatus};

use crate::ledger::{Account, Amount, CardId, LedgerError, TransactionKind};
use crate::persistence::{Persistence, PersistenceError};
use crate::vault::{NoteBundle, Vault, VaultError};

use chrono::{Local, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TellerError {
    #[error("cash unit: {0}")]
    Vault(#[from] VaultError),

    #[error("account: {0}")]
    Ledger(#[from] LedgerError),

    /// The card has no account on file and the teller is configured to
    /// reject unknown cards.
    #[error("no account on file for card {0}")]
    AccountNotFound(CardId),

    #[error("the card has expired")]
    CardExpired,

    #[error("wrong PIN, {attempts_left} attempt(s) left")]
    WrongPin { attempts_left: u8 },

    #[error("card blocked after too many failed PIN attempts")]
    CardBlocked,

    /// An operation was requested without an authenticated session.
    #[error("no authenticated session")]
    NoSession,

    /// Stored state could not be loaded. Failed *saves* are not an error:
    /// they degrade the operation's durability instead (see [`Durability`]).
    #[error("stored state could not be loaded: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Whether a committed operation made it to durable storage.
///
/// The in-memory state has already advanced when the snapshot write fails,
/// so the operation *did* happen; reporting it as a failure would be wrong,
/// and swallowing the write failure would hide a real problem. The caller
/// gets the committed result plus this flag and can alert or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    Durable,
    NotDurable(String),
}

impl Durability {
    pub fn is_durable(&self) -> bool {
        *self == Self::Durable
    }
}

/// What the customer takes away from a committed operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub fee: Amount,
    pub balance_after: Amount,
    /// The exact notes that crossed the cash boundary, when any did.
    pub notes: Option<NoteBundle>,
    pub durability: Durability,
}

/// What to do when an inserted card has no account on file.
///
/// The terminal this models used to silently fabricate a default account for
/// unknown cards, which turns a storage miss into an open account with a
/// well-known PIN. Rejecting is the default; provisioning is an explicit
/// opt-in for bootstrap/demo setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPolicy {
    RejectUnknown,
    ProvisionDefault,
}

/// An operation a customer can request once authenticated.
#[derive(Debug, PartialEq)]
pub enum Operation {
    Withdraw(Amount),
    Deposit(NoteBundle),
    Transfer { amount: Amount, recipient: CardId },
    Balance,
    Statement,
}

/// One operation request as fed by the operation stream: the card and PIN
/// to authenticate with, and what to do once authenticated.
#[derive(Debug, PartialEq)]
pub struct OperationRequest {
    pub card: CardId,
    pub pin: String,
    pub operation: Operation,
}

/// The orchestrator: one authenticated customer at a time, sequential
/// operations, vault and ledger state held in memory between snapshots.
pub struct Teller<P: Persistence> {
    pub(super) store: P,
    pub(super) vault: Vault,
    pub(super) session: Option<Account>,
    policy: AccountPolicy,
    pin_attempts: u8,
}

const MAX_PIN_ATTEMPTS: u8 = 3;
const DEFAULT_PIN: &str = "1234";
const DEFAULT_OPENING_BALANCE: Amount = dec!(500);

impl<P: Persistence> Teller<P> {
    /// Boot the terminal: load the vault snapshot, falling back to the
    /// default vault when none exists yet.
    pub fn new(store: P) -> Result<Self, TellerError> {
        Self::with_policy(store, AccountPolicy::RejectUnknown)
    }

    pub fn with_policy(store: P, policy: AccountPolicy) -> Result<Self, TellerError> {
        let vault = store.load_vault()?.unwrap_or_default();
        log::info!(
            "terminal ready: ${} on hand, {} receipt sheets, firmware {}",
            vault.total_value(),
            vault.paper_sheets(),
            vault.firmware()
        );
        Ok(Self {
            store,
            vault,
            session: None,
            policy,
            pin_attempts: 0,
        })
    }

    /// Open a session for a card. Replaces any previous session.
    pub fn authenticate(&mut self, card: &str, pin: &str) -> Result<(), TellerError> {
        let today = today();
        let account = match self.store.load_account(card)? {
            Some(account) => account,
            None => match self.policy {
                AccountPolicy::RejectUnknown => {
                    return Err(TellerError::AccountNotFound(card.to_string()))
                }
                AccountPolicy::ProvisionDefault => {
                    log::warn!("provisioning a default account for unknown card {}", card);
                    Account::new(card.to_string(), DEFAULT_PIN, DEFAULT_OPENING_BALANCE, today)
                }
            },
        };

        if account.is_expired(today) {
            return Err(TellerError::CardExpired);
        }

        if !account.verify_pin(pin) {
            self.pin_attempts += 1;
            if self.pin_attempts >= MAX_PIN_ATTEMPTS {
                return Err(TellerError::CardBlocked);
            }
            return Err(TellerError::WrongPin {
                attempts_left: MAX_PIN_ATTEMPTS - self.pin_attempts,
            });
        }

        self.pin_attempts = 0;
        log::info!("session opened for card {}", card);
        self.session = Some(account);
        Ok(())
    }

    /// The authenticated account, or `NoSession`.
    pub fn account(&self) -> Result<&Account, TellerError> {
        self.session.as_ref().ok_or(TellerError::NoSession)
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Replace the session account's PIN and persist the change.
    pub fn change_pin(&mut self, new_pin: &str) -> Result<Durability, TellerError> {
        let account = self.session.as_mut().ok_or(TellerError::NoSession)?;
        account.set_pin(new_pin)?;
        Ok(self.persist())
    }

    /// Snapshot the session account and the vault. A failed write degrades
    /// to a durability warning: the in-memory state has already advanced.
    pub(super) fn persist(&mut self) -> Durability {
        let result = match &self.session {
            Some(account) => self.store.save_account(account),
            None => Ok(()),
        };
        let result = result.and_then(|()| self.store.save_vault(&self.vault));

        match result {
            Ok(()) => Durability::Durable,
            Err(err) => {
                log::warn!("committed state not persisted: {}", err);
                Durability::NotDurable(err.to_string())
            }
        }
    }
}

pub(super) fn today() -> NaiveDate {
    Local::now().date_naive()
}

// The vault counts whole dollars; the ledger counts decimals. A withdrawal
// amount must survive the crossing exactly or be rejected.
pub(super) fn whole_dollars(amount: Amount) -> Result<u32, VaultError> {
    if amount <= Amount::ZERO || !amount.fract().is_zero() {
        return Err(VaultError::InvalidAmount);
    }
    amount.to_u32().ok_or(VaultError::InvalidAmount)
}
