//! Console blackjack against the dealer.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjconsole::{Console, Game, GameOptions};
use flexi_logger::Logger;
use log::debug;

fn main() -> Result<(), Box<dyn core::error::Error>> {
    // Diagnostics go to stderr; stdout carries the game.
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    debug!("shuffle seed {seed}");

    let game = Game::new(GameOptions::default(), seed, "Player1");
    let stdin = io::stdin();
    let stdout = io::stdout();

    Console::new(game, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
