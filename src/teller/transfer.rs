use super::{Durability, Receipt, Teller, TellerError};
use crate::ledger::{Amount, LedgerError, TransactionKind, TRANSFER_FEE};
use crate::persistence::Persistence;

impl<P: Persistence> Teller<P> {
    /// Move funds to another account.
    ///
    /// No physical cash is involved, so the vault stays out of it and the
    /// daily withdrawal limit does not apply. The recipient lookup is always
    /// fail-closed: money must not be sent to a card nobody holds, whatever
    /// the provisioning policy for logins says.
    pub fn transfer(&mut self, recipient: &str, amount: Amount) -> Result<Receipt, TellerError> {
        let account = match self.session.as_mut() {
            Some(account) => account,
            None => return Err(TellerError::NoSession),
        };

        // Sending to oneself would load a second copy of the same account
        // and let the later snapshot overwrite the earlier one.
        if account.card() == recipient {
            return Err(LedgerError::InvalidAmount.into());
        }

        let mut recipient_account = self
            .store
            .load_account(recipient)?
            .ok_or_else(|| TellerError::AccountNotFound(recipient.to_string()))?;

        account.transfer_out(amount, recipient)?;
        recipient_account
            .receive_transfer(amount, account.card())
            .expect("transfer_out already validated the amount");
        let balance_after = account.balance();

        if self.vault.use_paper(1).is_err() {
            log::warn!("out of receipt paper, transfer receipt not printed");
        }

        let durability = match self.store.save_account(&recipient_account) {
            Ok(()) => self.persist(),
            Err(err) => {
                log::warn!("recipient account not persisted: {}", err);
                // Still snapshot our own side; the warning wins either way.
                self.persist();
                Durability::NotDurable(err.to_string())
            }
        };

        Ok(Receipt {
            kind: TransactionKind::TransferOut,
            amount,
            fee: TRANSFER_FEE,
            balance_after,
            notes: None,
            durability,
        })
    }
}

#[cfg(test)]
mod transfer_tests {
    use crate::ledger::{Account, LedgerError, TransactionKind};
    use crate::persistence::{MemoryStore, Persistence};
    use crate::teller::{today, Teller, TellerError};
    use crate::vault::{NoteBundle, PaperTank, Vault};

    use rust_decimal_macros::dec;

    const SENDER: &str = "4532123456789012";
    const RECIPIENT: &str = "9999888877776666";

    fn teller(sender_balance: rust_decimal::Decimal) -> Teller<MemoryStore> {
        let mut store = MemoryStore::new();
        store
            .save_vault(&Vault::new(NoteBundle::new(5, 5, 5), "v1.0", PaperTank::new(10)))
            .unwrap();
        store
            .save_account(&Account::new(SENDER.to_string(), "1234", sender_balance, today()))
            .unwrap();
        store
            .save_account(&Account::new(RECIPIENT.to_string(), "5678", dec!(10), today()))
            .unwrap();

        let mut teller = Teller::new(store).unwrap();
        teller.authenticate(SENDER, "1234").unwrap();
        teller
    }

    #[test]
    fn test_transfer_debits_sender_and_credits_recipient() {
        let mut teller = teller(dec!(500));

        let receipt = teller.transfer(RECIPIENT, dec!(100)).unwrap();

        assert_eq!(TransactionKind::TransferOut, receipt.kind);
        assert_eq!(dec!(100), receipt.amount);
        assert_eq!(dec!(1.00), receipt.fee);
        assert_eq!(dec!(399.00), receipt.balance_after);
        assert_eq!(None, receipt.notes);
        assert!(receipt.durability.is_durable());

        let recipient = teller.store.load_account(RECIPIENT).unwrap().unwrap();
        assert_eq!(dec!(110), recipient.balance());
        assert_eq!(
            TransactionKind::TransferIn,
            recipient.history().last().unwrap().kind
        );

        // The vault holds no more and no less cash than before.
        assert_eq!(850, teller.vault().total_value());
    }

    #[test]
    fn test_transfer_to_unknown_card_fails_closed() {
        let mut teller = teller(dec!(500));

        let got = teller.transfer("0000000000000000", dec!(100));
        assert!(matches!(got, Err(TellerError::AccountNotFound(_))), "{:?}", got);
        assert_eq!(dec!(500), teller.account().unwrap().balance());
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_both_sides_untouched() {
        let mut teller = teller(dec!(100));

        // 100 alone fits, 100 + 1.00 does not.
        let got = teller.transfer(RECIPIENT, dec!(100));
        assert!(
            matches!(got, Err(TellerError::Ledger(LedgerError::InsufficientFunds))),
            "{:?}",
            got
        );
        assert_eq!(dec!(100), teller.account().unwrap().balance());

        let recipient = teller.store.load_account(RECIPIENT).unwrap().unwrap();
        assert_eq!(dec!(10), recipient.balance());
    }

    #[test]
    fn test_transfer_to_self_is_rejected() {
        let mut teller = teller(dec!(500));

        let got = teller.transfer(SENDER, dec!(100));
        assert!(
            matches!(got, Err(TellerError::Ledger(LedgerError::InvalidAmount))),
            "{:?}",
            got
        );
        assert_eq!(dec!(500), teller.account().unwrap().balance());
    }

    #[test]
    // The daily withdrawal cap bounds physical cash only; transfers go
    // through even when it is exhausted.
    fn test_transfer_bypasses_the_daily_limit() {
        let mut teller = teller(dec!(1000));
        teller.withdraw(dec!(500)).unwrap(); // exhaust the daily limit

        let receipt = teller.transfer(RECIPIENT, dec!(200)).unwrap();
        assert_eq!(dec!(200), receipt.amount);

        let account = teller.account().unwrap();
        assert_eq!(account.daily_limit(), account.daily_used());
    }
}
