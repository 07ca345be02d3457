use super::{NoteBundle, PaperTank};
use thiserror::Error;

/// Note: I chose to keep errors simple here.
/// The teller layer wraps these with session context; the variants only need
/// to stay distinguishable so an operator can tell a cash shortage from a
/// paper outage.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum VaultError {
    /// The requested amount is zero, not a multiple of the smallest note, or
    /// larger than the cash on hand.
    #[error("amount must be a positive multiple of $20, up to the cash on hand")]
    InvalidAmount,

    /// The notes on hand cannot compose the requested amount exactly, even
    /// though their total value would cover it.
    #[error("the notes on hand cannot compose the requested amount")]
    DenominationUnavailable,

    /// Adding the notes would push the vault past its cash capacity.
    #[error("the vault cannot hold that much cash")]
    CapacityExceeded,

    /// The receipt paper tank has fewer sheets than requested.
    #[error("the receipt paper tank is empty")]
    OutOfPaper,
}

/// The vault is the physical side of the terminal: banknote inventory,
/// receipt paper, and the hardware bookkeeping fields that ride along in the
/// persisted snapshot (firmware version, ink level). Only the notes and the
/// paper participate in transaction logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    pub(crate) notes: NoteBundle,
    pub(crate) paper: PaperTank,
    pub(crate) firmware: String,
    pub(crate) ink_level: u8,
}

impl Vault {
    /// Upper bound on the total face value the vault may hold.
    pub const MAX_CASH_CAPACITY: u32 = 50_000;

    /// Below this total face value the terminal is considered low on cash.
    pub const MIN_CASH_THRESHOLD: u32 = 500;

    pub fn new(notes: NoteBundle, firmware: impl Into<String>, paper: PaperTank) -> Self {
        Self {
            notes,
            paper,
            firmware: firmware.into(),
            ink_level: 15,
        }
    }

    /// Total face value of the notes on hand, in whole dollars.
    pub fn total_value(&self) -> u32 {
        self.notes.value()
    }

    pub fn notes(&self) -> NoteBundle {
        self.notes
    }

    pub fn is_low_on_cash(&self) -> bool {
        self.total_value() < Self::MIN_CASH_THRESHOLD
    }

    /// More than 90% of the cash capacity is in use.
    pub fn is_near_capacity(&self) -> bool {
        self.total_value() * 10 > Self::MAX_CASH_CAPACITY * 9
    }

    pub fn is_paper_empty(&self) -> bool {
        self.paper.is_empty()
    }

    pub fn is_paper_low(&self) -> bool {
        self.paper.is_low()
    }

    pub fn paper_sheets(&self) -> u32 {
        self.paper.sheets()
    }

    /// Consume `n` receipt sheets. No-op when fewer than `n` remain.
    pub fn use_paper(&mut self, n: u32) -> Result<(), VaultError> {
        self.paper.use_sheets(n)
    }

    pub fn refill_paper(&mut self) {
        self.paper.refill();
    }

    /// Empty the vault, returning every note it held.
    pub fn drain_notes(&mut self) -> NoteBundle {
        std::mem::take(&mut self.notes)
    }

    pub fn firmware(&self) -> &str {
        &self.firmware
    }

    pub fn set_firmware(&mut self, version: impl Into<String>) {
        self.firmware = version.into();
    }

    pub fn ink_level(&self) -> u8 {
        self.ink_level
    }

    pub fn set_ink_level(&mut self, percent: u8) {
        self.ink_level = percent;
    }
}

/// The state a terminal boots with when no snapshot exists yet: $2,000 in
/// fifties, a nearly empty paper tank and factory firmware.
impl Default for Vault {
    fn default() -> Self {
        Self::new(NoteBundle::new(0, 40, 0), "v1.0", PaperTank::new(10))
    }
}
