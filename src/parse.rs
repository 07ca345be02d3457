use crate::ledger::Amount;
use crate::teller::{Operation, OperationRequest};
use crate::vault::NoteBundle;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The CSV itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// A row parsed but does not describe a valid operation.
    #[error("invalid operation record: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Format(err.to_string())
    }
}

// When parsing, I'm making the assumption that we want to completely abort
// on errors.
// When we're reading a CSV file, it makes sense to fix the CSV (or the code),
// then try again.
// For a real-world scenario where we're receiving a stream of events instead,
// we would probably filter out bad rows and send them to an external system
// for analysis and recovery.
pub fn parse(input: impl std::io::Read) -> Result<Vec<OperationRequest>, Error> {
    let buffered = std::io::BufReader::new(input);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    reader
        .deserialize::<OperationRecord>()
        .map(|r| match r {
            Ok(record) => Ok(record.try_into()?),
            Err(err) => Err(err.into()),
        })
        .collect()
}

// I have an OperationRecord type because I can't directly deserialise into my
// "domain" type, i.e. OperationRequest.
//
// This gives me way more flexibility in crafting a clean OperationRequest
// type, that makes the rest of the code easier to reason about.
// Besides, the internal request type makes no assumption on how the
// operations are actually formatted, so both domain logic and parsing are
// easier to maintain.
#[derive(Debug, Deserialize)]
struct OperationRecord {
    #[serde(rename = "type")]
    op_type: OperationRecordType,

    card: String,

    pin: String,

    amount: Option<Amount>,

    recipient: Option<String>,

    // Deposits carry explicit note counts instead of a scalar amount, so the
    // vault inventory stays exact.
    c100: Option<u32>,
    c50: Option<u32>,
    c20: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OperationRecordType {
    Withdrawal,
    Deposit,
    Transfer,
    Balance,
    Statement,
}

impl TryFrom<OperationRecord> for OperationRequest {
    type Error = &'static str;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let operation = match record.op_type {
            OperationRecordType::Withdrawal => Operation::Withdraw(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for withdrawal"),
            }),
            OperationRecordType::Deposit => {
                let notes = NoteBundle::new(
                    record.c100.unwrap_or(0),
                    record.c50.unwrap_or(0),
                    record.c20.unwrap_or(0),
                );
                if notes.is_empty() {
                    return Err("missing note counts for deposit");
                }
                Operation::Deposit(notes)
            }
            OperationRecordType::Transfer => Operation::Transfer {
                amount: match record.amount {
                    Some(amount) => amount,
                    None => return Err("missing amount for transfer"),
                },
                recipient: match record.recipient {
                    Some(recipient) => recipient,
                    None => return Err("missing recipient for transfer"),
                },
            },
            OperationRecordType::Balance => Operation::Balance,
            OperationRecordType::Statement => Operation::Statement,
        };

        Ok(Self {
            card: record.card,
            pin: record.pin,
            operation,
        })
    }
}

#[test]
// Parsing well-formed data should return a vector of OperationRequest.
fn test_parse_ok() {
    let data = r#"type,card,pin,amount,recipient,c100,c50,c20
withdrawal,4532123456789012,1234,100,,,,
deposit,4532123456789012,1234,,,2,1,0
transfer,4532123456789012,1234,50,9999888877776666,,,
balance,4532123456789012,1234,,,,,
statement,4532123456789012,1234,,,,,"#;
    let reader = std::io::Cursor::new(data);
    let requests = parse(reader).expect("parsing should succeed");

    assert_eq!(5, requests.len());
    assert_eq!(
        OperationRequest {
            card: "4532123456789012".to_string(),
            pin: "1234".to_string(),
            operation: Operation::Withdraw(rust_decimal_macros::dec!(100)),
        },
        requests[0]
    );
    assert_eq!(
        Operation::Deposit(NoteBundle::new(2, 1, 0)),
        requests[1].operation
    );
    assert_eq!(
        Operation::Transfer {
            amount: rust_decimal_macros::dec!(50),
            recipient: "9999888877776666".to_string(),
        },
        requests[2].operation
    );
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"type,   card,  pin,  amount,recipient,c100,c50,c20
withdrawal , 4532123456789012 , 1234 , 100 ,,,,
    balance ,4532123456789012,1234,,,,,"#;
    let reader = std::io::Cursor::new(data);
    let requests = parse(reader).expect("parsing should succeed");

    assert_eq!(2, requests.len());
}

#[test]
// Parsing incorrectly formatted data should return an Err.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
some_unknown_op,4532123456789012,1234,100,,,,"#,
            "unknown variant `some_unknown_op`",
        ),
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
withdrawal,4532123456789012,1234"#,
            "found record with 4 fields, but the previous record has 8 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let got_err = parse(reader);
        assert!(got_err.is_err());

        let err = got_err.err().unwrap();
        match err {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            Error::Format(_) => panic!("unexpected error"),
        }
    }
}

#[test]
// Rows that parse but miss the fields their operation needs should fail to
// convert into an OperationRequest.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
withdrawal,4532123456789012,1234,,,,,"#,
            Error::Format("missing amount for withdrawal".to_string()),
        ),
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
deposit,4532123456789012,1234,,,,,"#,
            Error::Format("missing note counts for deposit".to_string()),
        ),
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
deposit,4532123456789012,1234,,,0,0,0"#,
            Error::Format("missing note counts for deposit".to_string()),
        ),
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
transfer,4532123456789012,1234,50,,,,"#,
            Error::Format("missing recipient for transfer".to_string()),
        ),
        (
            r#"type,card,pin,amount,recipient,c100,c50,c20
transfer,4532123456789012,1234,,9999888877776666,,,"#,
            Error::Format("missing amount for transfer".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let got_err = parse(reader);
        assert_eq!(Err(want_err), got_err);
    }
}
