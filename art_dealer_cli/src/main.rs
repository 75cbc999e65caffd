mod card;
mod console;
mod deck;
mod error;
mod event;
mod game;
mod hand;
mod logger;
mod pattern;
mod score;
mod selection;
mod settings;

use std::io;

use clap::Parser;

use console::Console;
use game::Game;
use settings::{Args, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from(Args::parse());
    logger::init(settings.log_level)?;

    let game = Game::new(settings.deck());
    let stdin = io::stdin();
    let mut console = Console::new(game, stdin.lock(), io::stdout(), settings.ascii);
    console.run()?;
    Ok(())
}
