use crate::ledger::Account;

/// Write an account's full transaction history to the given stream as CSV,
/// oldest line first.
pub fn write_statement(
    output_stream: impl std::io::Write,
    account: &Account,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for record in account.history() {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
