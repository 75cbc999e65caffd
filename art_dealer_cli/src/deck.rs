use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;

pub const DECK_SIZE: usize = 52;

pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    pub fn new_shuffled() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn new_seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { cards: Self::universe(), rng }
    }

    /// The full deck, rank by rank, each rank in suit order.
    pub fn universe() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for r in Rank::ALL {
            for s in Suit::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards
    }

    /// Reshuffles all 52 cards and takes the top `n`. Earlier draws are never held back.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::InvalidDrawSize { requested: n, available: self.cards.len() });
        }
        self.cards.shuffle(&mut self.rng);
        Ok(self.cards[..n].to_vec())
    }
}
