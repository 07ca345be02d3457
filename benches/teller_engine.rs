use criterion::{criterion_group, criterion_main, Criterion};

use teller_engine::ledger::Account;
use teller_engine::persistence::{MemoryStore, Persistence};
use teller_engine::run::run;
use teller_engine::vault::{NoteBundle, PaperTank, Vault};

use rust_decimal_macros::dec;

fn seeded_store() -> MemoryStore {
    let today = chrono::Local::now().date_naive();
    let mut store = MemoryStore::new();
    store
        .save_vault(&Vault::new(
            NoteBundle::new(100, 100, 100),
            "v1.0",
            PaperTank::new(500),
        ))
        .unwrap();
    store
        .save_account(&Account::new(
            "4532123456789012".to_string(),
            "1234",
            dec!(1_000_000),
            today,
        ))
        .unwrap();
    store
        .save_account(&Account::new(
            "9999888877776666".to_string(),
            "5678",
            dec!(10),
            today,
        ))
        .unwrap();
    store
}

// The repeated block mixes committed operations with ones the engine will
// reject once limits bite (daily cap, paper stock, vault capacity), so the
// rejection paths are part of the measurement too.
fn operations(repeat: usize) -> String {
    format!(
        "type,card,pin,amount,recipient,c100,c50,c20\n{}",
        r#"deposit,4532123456789012,1234,,,0,1,0
withdrawal,4532123456789012,1234,20,,,,
transfer,4532123456789012,1234,5,9999888877776666,,,
balance,4532123456789012,1234,,,,,"#
            .repeat(repeat)
    )
}

pub fn bench_process_operations_4000_lines(c: &mut Criterion) {
    c.bench_function("process_operations_4_000", |b| {
        let data = operations(1_000);
        let cursor = std::io::Cursor::new(data);
        let store = seeded_store();

        b.iter(move || {
            let _ = run(cursor.clone(), std::io::sink(), store.clone());
        })
    });
}

pub fn bench_process_operations_40000_lines(c: &mut Criterion) {
    c.bench_function("process_operations_40_000", |b| {
        let data = operations(10_000);
        let cursor = std::io::Cursor::new(data);
        let store = seeded_store();

        b.iter(move || {
            let _ = run(cursor.clone(), std::io::sink(), store.clone());
        })
    });
}

criterion_group!(
    benches,
    bench_process_operations_4000_lines,
    bench_process_operations_40000_lines,
);
criterion_main!(benches);
