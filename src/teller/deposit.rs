use super::{Receipt, Teller, TellerError};
use crate::ledger::{Amount, LedgerError, TransactionKind};
use crate::persistence::Persistence;
use crate::vault::NoteBundle;

impl<P: Persistence> Teller<P> {
    /// Deposit a batch of notes into the terminal.
    ///
    /// The inserted notes *are* the amount: requiring an explicit bundle at
    /// this boundary keeps the vault inventory exact, where a scalar amount
    /// would force an inferred split. Vault credit first, then ledger
    /// credit; both are monotonic increases, so no compensation path exists
    /// here.
    pub fn deposit(&mut self, notes: NoteBundle) -> Result<Receipt, TellerError> {
        let account = match self.session.as_mut() {
            Some(account) => account,
            None => return Err(TellerError::NoSession),
        };

        if notes.is_empty() {
            return Err(LedgerError::InvalidAmount.into());
        }
        let amount = Amount::from(notes.value());

        self.vault.replenish(notes)?;
        account
            .deposit(amount)
            .expect("a non-empty bundle has a positive value");
        let balance_after = account.balance();

        // Receipts for deposits are best-effort: the original terminal
        // printed a warning and carried on when the tank was empty, and only
        // withdrawals hard-gate on paper.
        if self.vault.use_paper(1).is_err() {
            log::warn!("out of receipt paper, deposit receipt not printed");
        }

        let durability = self.persist();
        Ok(Receipt {
            kind: TransactionKind::Deposit,
            amount,
            fee: Amount::ZERO,
            balance_after,
            notes: Some(notes),
            durability,
        })
    }
}
