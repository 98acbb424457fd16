//! Block Breaker entry point
//!
//! Loads settings and runs one game in the terminal.

use anyhow::Context;

use block_breaker::Settings;
use block_breaker::app::{self, Outcome};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Block Breaker starting...");

    let settings = Settings::load();
    let summary = app::run(&settings).context("terminal game loop failed")?;

    match summary.outcome {
        Outcome::BallLost => println!("Game over!"),
        Outcome::Quit => println!("Thanks for playing!"),
    }
    println!(
        "Final score: {} ({} blocks left after {} ticks)",
        summary.score, summary.blocks_left, summary.ticks
    );

    Ok(())
}
