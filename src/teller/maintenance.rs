use super::TellerError;
use crate::persistence::Persistence;
use crate::vault::{NoteBundle, Vault};

/// A point-in-time view of the terminal hardware, for the service menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultStatus {
    pub firmware: String,
    pub total_cash: u32,
    pub notes: NoteBundle,
    pub paper_sheets: u32,
    pub ink_level: u8,
    pub low_on_cash: bool,
    pub near_capacity: bool,
    pub paper_low: bool,
}

/// Technician operations: each one is a load-mutate-save through the
/// gateway, independent of any customer session. Credential checking for
/// staff access happens outside this crate.
///
/// Unlike customer operations, a failed save here is a hard error: there is
/// no committed customer transaction to protect, and a technician wants to
/// know immediately that the terminal did not take the change.
pub struct Technician<'a, P: Persistence> {
    store: &'a mut P,
}

impl<'a, P: Persistence> Technician<'a, P> {
    pub fn new(store: &'a mut P) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vault, TellerError> {
        Ok(self.store.load_vault()?.unwrap_or_default())
    }

    pub fn status(&self) -> Result<VaultStatus, TellerError> {
        let vault = self.load()?;
        Ok(VaultStatus {
            firmware: vault.firmware().to_string(),
            total_cash: vault.total_value(),
            notes: vault.notes(),
            paper_sheets: vault.paper_sheets(),
            ink_level: vault.ink_level(),
            low_on_cash: vault.is_low_on_cash(),
            near_capacity: vault.is_near_capacity(),
            paper_low: vault.is_paper_low(),
        })
    }

    pub fn refill_paper(&mut self) -> Result<(), TellerError> {
        let mut vault = self.load()?;
        vault.refill_paper();
        self.store.save_vault(&vault)?;
        log::info!("paper tank refilled");
        Ok(())
    }

    /// Load an explicit batch of notes into the vault.
    pub fn add_notes(&mut self, notes: NoteBundle) -> Result<(), TellerError> {
        let mut vault = self.load()?;
        vault.replenish(notes)?;
        self.store.save_vault(&vault)?;
        log::info!("technician added {}", notes);
        Ok(())
    }

    /// Empty the vault, returning the collected notes.
    pub fn collect_notes(&mut self) -> Result<NoteBundle, TellerError> {
        let mut vault = self.load()?;
        let collected = vault.drain_notes();
        self.store.save_vault(&vault)?;
        log::info!("technician collected {} (${})", collected, collected.value());
        Ok(collected)
    }

    pub fn update_firmware(&mut self, version: &str) -> Result<(), TellerError> {
        let mut vault = self.load()?;
        vault.set_firmware(version);
        self.store.save_vault(&vault)?;
        log::info!("firmware updated to {}", version);
        Ok(())
    }

    /// Routine service: fresh ink, full paper tank.
    pub fn perform_maintenance(&mut self) -> Result<(), TellerError> {
        let mut vault = self.load()?;
        vault.set_ink_level(100);
        vault.refill_paper();
        self.store.save_vault(&vault)?;
        log::info!("maintenance complete");
        Ok(())
    }
}

#[cfg(test)]
mod technician_tests {
    use super::Technician;
    use crate::persistence::{MemoryStore, Persistence};
    use crate::vault::{NoteBundle, PaperTank, Vault, VaultError};
    use crate::teller::TellerError;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .save_vault(&Vault::new(NoteBundle::new(3, 2, 1), "v1.0", PaperTank::new(5)))
            .unwrap();
        store
    }

    #[test]
    fn test_status() {
        let mut store = store();
        let tech = Technician::new(&mut store);

        let status = tech.status().unwrap();
        assert_eq!("v1.0", status.firmware);
        assert_eq!(420, status.total_cash);
        assert_eq!(5, status.paper_sheets);
        assert!(status.low_on_cash);
        assert!(status.paper_low);
        assert!(!status.near_capacity);
    }

    #[test]
    fn test_refill_paper_persists() {
        let mut store = store();
        Technician::new(&mut store).refill_paper().unwrap();

        let vault = store.load_vault().unwrap().unwrap();
        assert_eq!(PaperTank::MAX_CAPACITY, vault.paper_sheets());
    }

    #[test]
    fn test_add_notes_respects_capacity() {
        let mut store = store();
        let mut tech = Technician::new(&mut store);

        tech.add_notes(NoteBundle::new(0, 0, 4)).unwrap();
        let got = tech.add_notes(NoteBundle::new(496, 0, 0));
        assert!(
            matches!(got, Err(TellerError::Vault(VaultError::CapacityExceeded))),
            "{:?}",
            got
        );

        let vault = store.load_vault().unwrap().unwrap();
        assert_eq!(500, vault.total_value());
    }

    #[test]
    fn test_collect_notes_empties_the_vault() {
        let mut store = store();

        let collected = Technician::new(&mut store).collect_notes().unwrap();
        assert_eq!(NoteBundle::new(3, 2, 1), collected);

        let vault = store.load_vault().unwrap().unwrap();
        assert_eq!(0, vault.total_value());
    }

    #[test]
    fn test_maintenance_and_firmware() {
        let mut store = store();
        let mut tech = Technician::new(&mut store);

        tech.update_firmware("v2.1.0").unwrap();
        tech.perform_maintenance().unwrap();

        let vault = store.load_vault().unwrap().unwrap();
        assert_eq!("v2.1.0", vault.firmware());
        assert_eq!(100, vault.ink_level());
        assert_eq!(PaperTank::MAX_CAPACITY, vault.paper_sheets());
    }
}
