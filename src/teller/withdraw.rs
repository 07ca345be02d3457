use super::{today, whole_dollars, Receipt, Teller, TellerError};
use crate::ledger::{Amount, TransactionKind, WITHDRAWAL_FEE};
use crate::persistence::Persistence;
use crate::vault::VaultError;

impl<P: Persistence> Teller<P> {
    /// Withdraw cash: the one operation that touches two independently-
    /// failing resources.
    ///
    /// The sequence is paper gate, physical dispense, ledger debit, receipt,
    /// snapshot. The paper gate runs before any cash moves: a withdrawal
    /// whose receipt cannot be printed must not start. If the ledger rejects
    /// the debit after the notes have left the vault, the exact dispensed
    /// bundle is returned to the vault, so the compensation restores both
    /// the total value and the denomination split.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Receipt, TellerError> {
        let account = match self.session.as_mut() {
            Some(account) => account,
            None => return Err(TellerError::NoSession),
        };

        if self.vault.is_paper_empty() {
            return Err(VaultError::OutOfPaper.into());
        }

        let notes = self.vault.dispense(whole_dollars(amount)?)?;

        if let Err(err) = account.withdraw(amount, today()) {
            log::info!("withdrawal of ${} rejected by the ledger: {}", amount, err);
            self.vault
                .replenish(notes)
                .expect("returning notes that just left the vault cannot exceed capacity");
            return Err(err.into());
        }

        let balance_after = account.balance();

        // Cannot fail: the paper gate above saw at least one sheet and
        // nothing else consumes paper within a session operation.
        self.vault.use_paper(1)?;

        let durability = self.persist();
        Ok(Receipt {
            kind: TransactionKind::Withdrawal,
            amount,
            fee: WITHDRAWAL_FEE,
            balance_after,
            notes: Some(notes),
            durability,
        })
    }
}
