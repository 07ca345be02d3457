use crate::parse::parse;
use crate::persistence::Persistence;
use crate::statement::write_statement;
use crate::teller::{Durability, Operation, Teller};

use std::error::Error;
use std::io::{Read, Write};

/// Drive a teller from a CSV operation stream, writing one result line per
/// operation.
///
/// Business-rule rejections do not abort the run: the stream carries on and
/// the rejection is reported on its own line, the way a customer at the
/// machine would see it. Only malformed input or a broken gateway aborts.
pub fn run(
    input: impl Read,
    mut output: impl Write,
    store: impl Persistence,
) -> Result<(), Box<dyn Error>> {
    let requests = parse(input)?;
    let mut teller = Teller::new(store)?;

    for request in requests {
        if let Err(err) = teller.authenticate(&request.card, &request.pin) {
            writeln!(output, "{}: login rejected: {}", request.card, err)?;
            continue;
        }

        match request.operation {
            Operation::Withdraw(amount) => match teller.withdraw(amount) {
                Ok(receipt) => writeln!(
                    output,
                    "{}: WITHDRAWAL ${} (fee ${}) -> balance ${}{}",
                    request.card,
                    receipt.amount,
                    receipt.fee,
                    receipt.balance_after,
                    durability_suffix(&receipt.durability),
                )?,
                Err(err) => writeln!(output, "{}: withdrawal rejected: {}", request.card, err)?,
            },
            Operation::Deposit(notes) => match teller.deposit(notes) {
                Ok(receipt) => writeln!(
                    output,
                    "{}: DEPOSIT ${} -> balance ${}{}",
                    request.card,
                    receipt.amount,
                    receipt.balance_after,
                    durability_suffix(&receipt.durability),
                )?,
                Err(err) => writeln!(output, "{}: deposit rejected: {}", request.card, err)?,
            },
            Operation::Transfer { amount, recipient } => {
                match teller.transfer(&recipient, amount) {
                    Ok(receipt) => writeln!(
                        output,
                        "{}: TRANSFER ${} (fee ${}) to {} -> balance ${}{}",
                        request.card,
                        receipt.amount,
                        receipt.fee,
                        recipient,
                        receipt.balance_after,
                        durability_suffix(&receipt.durability),
                    )?,
                    Err(err) => writeln!(output, "{}: transfer rejected: {}", request.card, err)?,
                }
            }
            Operation::Balance => {
                let account = teller.account()?;
                writeln!(output, "{}: balance ${}", request.card, account.balance())?;
            }
            Operation::Statement => write_statement(&mut output, teller.account()?)?,
        }
    }

    Ok(())
}

fn durability_suffix(durability: &Durability) -> String {
    match durability {
        Durability::Durable => String::new(),
        Durability::NotDurable(reason) => format!(" [not persisted: {}]", reason),
    }
}
