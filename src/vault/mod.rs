//! Physical cash handling: the note vault and the receipt paper tank.
//!
//! Vault: owns the banknote inventory and answers "can I physically produce
//! amount X".
//! PaperTank: owns the receipt paper stock.

pub mod dispense;
pub mod paper;
pub mod replenish;
#[allow(clippy::module_inception)]
pub mod vault;

pub use paper::PaperTank;
pub use vault::{Vault, VaultError};

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following:
// (1) hundreds: u32
// (2) hundreds: NoteCount
// Implementation (1) could be mistaken for a dollar value; implementation (2)
// is self-explanatory. Besides, maintenance is easier: growing counts to u64
// is trivial.
pub type NoteCount = u32;

/// The smallest banknote the terminal can dispense. Every dispensable amount
/// is a multiple of this face value.
pub const SMALLEST_NOTE: u32 = 20;

/// A batch of banknotes, counted per face value.
///
/// This is both the vault's inventory representation and the unit of exchange
/// at the cash boundary: dispense returns the exact notes that left the
/// vault, replenish takes the exact notes that enter it. Requiring explicit
/// counts here keeps the inventory accounting exact; the only scalar entry
/// point is the legacy [`Vault::replenish_scalar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteBundle {
    pub hundreds: NoteCount,
    pub fifties: NoteCount,
    pub twenties: NoteCount,
}

impl NoteBundle {
    pub const fn new(hundreds: NoteCount, fifties: NoteCount, twenties: NoteCount) -> Self {
        Self {
            hundreds,
            fifties,
            twenties,
        }
    }

    /// Total face value of the bundle, in whole dollars.
    pub fn value(&self) -> u32 {
        100 * self.hundreds + 50 * self.fifties + SMALLEST_NOTE * self.twenties
    }

    pub fn is_empty(&self) -> bool {
        self.hundreds == 0 && self.fifties == 0 && self.twenties == 0
    }
}

impl std::fmt::Display for NoteBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "$100x{}, $50x{}, $20x{}",
            self.hundreds, self.fifties, self.twenties
        )
    }
}
