use std::env;
use std::fs::File;
use std::process;

use teller_engine::persistence::JsonStore;
use teller_engine::run::run;

use log::info;

fn main() {
    // Expecting an operations CSV, plus an optional state directory for the
    // JSON snapshots.
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <operations.csv> [state-dir]", args[0]);
        process::exit(1);
    }
    let filename = &args[1];
    let state_dir = args.get(2).map(String::as_str).unwrap_or("state");

    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    info!(
        "starting teller engine with operations file: {}, state dir: {}",
        filename, state_dir
    );

    let input = match File::open(filename) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error: cannot open {}: {}", filename, err);
            process::exit(1);
        }
    };

    if let Err(err) = run(input, std::io::stdout(), JsonStore::new(state_dir)) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
