//! Plays one round of blackjack on the terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_round::{Console, Game, GameOptions};

fn main() -> ExitCode {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    log::debug!("seeding deck with {seed}");

    let mut game = Game::new(GameOptions::default(), seed, Console::stdio());

    match game.play_round() {
        Ok(result) => {
            log::info!("{:?}", result.outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("round aborted: {err}");
            eprintln!("Round aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
