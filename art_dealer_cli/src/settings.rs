use clap::Parser;
use log::LevelFilter;

use crate::deck::Deck;

/// Art Dealer: guess which pattern the dealer's hidden hand fits
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for a reproducible deck
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print cards as `10-H` instead of `10 ♥`
    #[arg(long)]
    ascii: bool,

    /// off, error, warn, info, debug or trace (debug shows the dealer's hand)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

pub struct Settings {
    pub seed: Option<u64>,
    pub ascii: bool,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn deck(&self) -> Deck {
        match self.seed {
            Some(seed) => Deck::new_seeded(seed),
            None => Deck::new_shuffled(),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self { seed: args.seed, ascii: args.ascii, log_level: args.log_level }
    }
}
