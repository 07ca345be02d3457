//! A cash terminal engine: a denomination-aware note vault, a per-account
//! ledger with fees and a rolling daily withdrawal limit, and the teller
//! that coordinates withdrawals, deposits and transfers across both without
//! true atomic transactions.
//!
//! The teller compensates the vault when the ledger rejects a debit the
//! vault already honoured, and surfaces snapshot-write failures as a
//! committed-but-not-durable warning instead of swallowing them.

pub mod ledger;
pub mod parse;
pub mod persistence;
pub mod run;
pub mod statement;
pub mod teller;
pub mod vault;
