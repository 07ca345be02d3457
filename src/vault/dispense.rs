use super::{NoteBundle, Vault, VaultError, SMALLEST_NOTE};

impl Vault {
    /// Dispense `amount` dollars, largest notes first.
    ///
    /// Greedy allocation is not guaranteed to find an exact combination even
    /// when the total value on hand is sufficient: a vault holding only
    /// hundreds cannot produce 260, so that request fails with
    /// `DenominationUnavailable` rather than dispensing a wrong amount.
    ///
    /// The call is all-or-nothing: on any failure the inventory is untouched.
    /// On success the returned bundle is exactly what left the vault, so a
    /// caller that needs to undo the dispense can return those same notes.
    pub fn dispense(&mut self, amount: u32) -> Result<NoteBundle, VaultError> {
        if amount == 0 || amount % SMALLEST_NOTE != 0 || amount > self.total_value() {
            return Err(VaultError::InvalidAmount);
        }

        let mut remaining = amount;

        let hundreds = (remaining / 100).min(self.notes.hundreds);
        remaining -= 100 * hundreds;

        let fifties = (remaining / 50).min(self.notes.fifties);
        remaining -= 50 * fifties;

        let twenties = (remaining / SMALLEST_NOTE).min(self.notes.twenties);
        remaining -= SMALLEST_NOTE * twenties;

        if remaining != 0 {
            return Err(VaultError::DenominationUnavailable);
        }

        self.notes.hundreds -= hundreds;
        self.notes.fifties -= fifties;
        self.notes.twenties -= twenties;

        let dispensed = NoteBundle::new(hundreds, fifties, twenties);
        log::debug!("dispensed {} (${})", dispensed, amount);
        Ok(dispensed)
    }
}

#[cfg(test)]
mod dispense_tests {
    use crate::vault::{NoteBundle, PaperTank, Vault, VaultError};

    fn vault(notes: NoteBundle) -> Vault {
        Vault::new(notes, "v1.0", PaperTank::new(10))
    }

    #[test]
    fn test_dispense_largest_notes_first() {
        let mut vault = vault(NoteBundle::new(5, 5, 5));

        let got = vault.dispense(370);
        assert_eq!(Ok(NoteBundle::new(3, 1, 1)), got);
        assert_eq!(NoteBundle::new(2, 4, 4), vault.notes());
    }

    #[test]
    fn test_dispense_falls_back_to_smaller_notes() {
        // Not enough hundreds: the remainder is covered by fifties and
        // twenties.
        let mut vault = vault(NoteBundle::new(1, 2, 10));

        let got = vault.dispense(300);
        assert_eq!(Ok(NoteBundle::new(1, 2, 5)), got);
        assert_eq!(NoteBundle::new(0, 0, 5), vault.notes());
    }

    #[test]
    // A vault holding only 3 hundreds (value 300) cannot compose 260, even
    // though 260 <= 300. Greedy takes 2 hundreds and is left with a
    // remainder of 60 it cannot cover.
    fn test_dispense_fails_when_notes_cannot_compose_amount() {
        let mut vault = vault(NoteBundle::new(3, 0, 0));

        let got = vault.dispense(260);
        assert_eq!(Err(VaultError::DenominationUnavailable), got);

        // All-or-nothing: no partial decrement on failure.
        assert_eq!(NoteBundle::new(3, 0, 0), vault.notes());
    }

    #[test]
    fn test_dispense_rejects_non_multiples_of_smallest_note() {
        for amount in vec![0, 10, 50, 250, 333] {
            let mut vault = vault(NoteBundle::new(3, 3, 3));

            let got = vault.dispense(amount);
            assert_eq!(Err(VaultError::InvalidAmount), got, "amount {}", amount);
            assert_eq!(NoteBundle::new(3, 3, 3), vault.notes());
        }
    }

    #[test]
    fn test_dispense_rejects_more_than_on_hand() {
        let mut vault = vault(NoteBundle::new(0, 0, 5)); // 100 on hand

        let got = vault.dispense(120);
        assert_eq!(Err(VaultError::InvalidAmount), got);
        assert_eq!(NoteBundle::new(0, 0, 5), vault.notes());
    }

    #[test]
    fn test_dispense_can_empty_the_vault() {
        let mut vault = vault(NoteBundle::new(1, 1, 1));

        let got = vault.dispense(170);
        assert_eq!(Ok(NoteBundle::new(1, 1, 1)), got);
        assert_eq!(0, vault.total_value());
    }
}
