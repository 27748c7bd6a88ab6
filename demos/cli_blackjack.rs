//! CLI blackjack example.
//!
//! Settings are kept in `blackjack.txt` in the working directory. Engine
//! warnings are written to stderr.

use std::time::{SystemTime, UNIX_EPOCH};

use shoebox::{Console, FileStore, StdinKeys, TerminalScreen};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut console = Console::load(
        StdinKeys::new(),
        TerminalScreen,
        FileStore::default(),
        seed,
    );

    if let Err(err) = console.run() {
        eprintln!("Game stopped: {err}");
    }
}
