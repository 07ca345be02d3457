use super::{NoteBundle, Vault, VaultError, SMALLEST_NOTE};

impl Vault {
    /// Add an explicit batch of notes to the inventory.
    ///
    /// Fails with `CapacityExceeded` when the resulting total value would
    /// exceed the vault capacity; nothing is applied in that case.
    pub fn replenish(&mut self, notes: NoteBundle) -> Result<(), VaultError> {
        if self.total_value() + notes.value() > Self::MAX_CASH_CAPACITY {
            return Err(VaultError::CapacityExceeded);
        }

        self.notes.hundreds += notes.hundreds;
        self.notes.fifties += notes.fifties;
        self.notes.twenties += notes.twenties;
        log::debug!("replenished {} (${})", notes, notes.value());
        Ok(())
    }

    /// Legacy scalar credit: add `amount` dollars, inferring a note split.
    ///
    /// The split is fifties first, remainder in twenties, stealing a fifty
    /// back when the remainder is not a multiple of twenty. The total value
    /// added is exact for any multiple of the smallest note, but the split is
    /// an inference, not a record of actual notes. Callers that know which
    /// notes entered the machine should use [`Vault::replenish`] instead;
    /// this variant only exists for flows that hand us a bare amount.
    pub fn replenish_scalar(&mut self, amount: u32) -> Result<(), VaultError> {
        if amount == 0 || amount % SMALLEST_NOTE != 0 {
            return Err(VaultError::InvalidAmount);
        }

        let mut fifties = amount / 50;
        let mut remainder = amount - 50 * fifties;
        while remainder % SMALLEST_NOTE != 0 && fifties > 0 {
            fifties -= 1;
            remainder += 50;
        }

        self.replenish(NoteBundle::new(0, fifties, remainder / SMALLEST_NOTE))
    }
}

#[cfg(test)]
mod replenish_tests {
    use crate::vault::{NoteBundle, PaperTank, Vault, VaultError};

    fn vault(notes: NoteBundle) -> Vault {
        Vault::new(notes, "v1.0", PaperTank::new(10))
    }

    #[test]
    fn test_replenish_adds_counts() {
        let mut vault = vault(NoteBundle::new(1, 2, 3));

        let got = vault.replenish(NoteBundle::new(2, 0, 5));
        assert_eq!(Ok(()), got);
        assert_eq!(NoteBundle::new(3, 2, 8), vault.notes());
    }

    #[test]
    fn test_replenish_rejects_over_capacity() {
        // 49_900 on hand, 200 more would exceed the 50_000 capacity.
        let mut vault = vault(NoteBundle::new(499, 0, 0));

        let got = vault.replenish(NoteBundle::new(2, 0, 0));
        assert_eq!(Err(VaultError::CapacityExceeded), got);
        assert_eq!(NoteBundle::new(499, 0, 0), vault.notes());
    }

    #[test]
    fn test_replenish_exactly_at_capacity() {
        let mut vault = vault(NoteBundle::new(499, 0, 0));

        let got = vault.replenish(NoteBundle::new(1, 0, 0));
        assert_eq!(Ok(()), got);
        assert_eq!(Vault::MAX_CASH_CAPACITY, vault.total_value());
    }

    #[test]
    // The inferred split favours fifties, with the remainder in twenties.
    fn test_replenish_scalar_split() {
        for (amount, want) in vec![
            (100, NoteBundle::new(0, 2, 0)),
            (120, NoteBundle::new(0, 2, 1)),
            (60, NoteBundle::new(0, 0, 3)),
            (40, NoteBundle::new(0, 0, 2)),
            (260, NoteBundle::new(0, 4, 3)),
        ] {
            let mut vault = vault(NoteBundle::default());

            let got = vault.replenish_scalar(amount);
            assert_eq!(Ok(()), got, "amount {}", amount);
            assert_eq!(want, vault.notes(), "amount {}", amount);
            assert_eq!(amount, vault.total_value(), "amount {}", amount);
        }
    }

    #[test]
    fn test_replenish_scalar_rejects_non_multiples() {
        for amount in vec![0, 10, 30, 45, 110] {
            let mut vault = vault(NoteBundle::default());

            let got = vault.replenish_scalar(amount);
            assert_eq!(Err(VaultError::InvalidAmount), got, "amount {}", amount);
            assert_eq!(0, vault.total_value());
        }
    }

    #[test]
    // Conservation: dispensing an amount and crediting the same scalar amount
    // back restores the total value, even though the note split may differ.
    fn test_dispense_then_scalar_credit_restores_total_value() {
        // Only amounts the greedy allocation can actually produce from this
        // mix; 60 or 260 would strand a $10 remainder behind a greedy fifty.
        for amount in vec![20, 100, 200, 340, 500] {
            let mut vault = vault(NoteBundle::new(5, 5, 5));
            let total_before = vault.total_value();

            vault.dispense(amount).expect("enough mixed notes on hand");
            vault
                .replenish_scalar(amount)
                .expect("crediting back what was just removed cannot exceed capacity");

            assert_eq!(total_before, vault.total_value(), "amount {}", amount);
        }
    }
}
