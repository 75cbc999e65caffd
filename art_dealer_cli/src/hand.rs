use std::collections::HashSet;
use std::fmt;

use crate::card::Card;
use crate::error::GameError;

pub const HAND_SIZE: usize = 4;

/// Exactly four distinct cards, in the order they were dealt or picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, GameError> {
        let distinct: HashSet<&Card> = cards.iter().collect();
        if cards.len() != HAND_SIZE || distinct.len() != HAND_SIZE {
            return Err(GameError::InvalidSelectionSize(distinct.len()));
        }
        Ok(Self { cards: cards.to_vec() })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Cards of `self` that also appear in `other`, in `self`'s order.
    pub fn shared_with(&self, other: &Hand) -> Vec<Card> {
        self.cards.iter().filter(|c| other.contains(c)).copied().collect()
    }

    pub fn red_count(&self) -> usize {
        self.cards.iter().filter(|c| c.suit.is_red()).count()
    }

    pub fn fmt_inline(&self, ascii: bool) -> String {
        fmt_cards(&self.cards, ascii)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt_inline(false))
    }
}

pub fn fmt_cards(cards: &[Card], ascii: bool) -> String {
    cards.iter()
        .map(|c| if ascii { c.fmt_ascii() } else { c.to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn requires_four_distinct_cards() {
        let three = [c(Rank::Ace, Suit::Hearts), c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Hearts)];
        assert_eq!(Hand::new(&three), Err(GameError::InvalidSelectionSize(3)));

        let dup = [
            c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Hearts),
            c(Rank::Two, Suit::Clubs), c(Rank::Three, Suit::Clubs),
        ];
        assert_eq!(Hand::new(&dup), Err(GameError::InvalidSelectionSize(3)));

        let five = [
            c(Rank::Ace, Suit::Hearts), c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Hearts),
            c(Rank::Four, Suit::Hearts), c(Rank::Five, Suit::Hearts),
        ];
        assert_eq!(Hand::new(&five), Err(GameError::InvalidSelectionSize(5)));
    }

    #[test]
    fn shared_with_keeps_own_order() {
        let mine = Hand::new(&[
            c(Rank::King, Suit::Spades), c(Rank::Two, Suit::Hearts),
            c(Rank::Nine, Suit::Clubs), c(Rank::Ace, Suit::Diamonds),
        ]).unwrap();
        let theirs = Hand::new(&[
            c(Rank::Ace, Suit::Diamonds), c(Rank::Three, Suit::Hearts),
            c(Rank::King, Suit::Spades), c(Rank::Four, Suit::Clubs),
        ]).unwrap();
        assert_eq!(
            mine.shared_with(&theirs),
            vec![c(Rank::King, Suit::Spades), c(Rank::Ace, Suit::Diamonds)]
        );
    }

    #[test]
    fn formats_inline() {
        let h = Hand::new(&[
            c(Rank::Ten, Suit::Hearts), c(Rank::Two, Suit::Diamonds),
            c(Rank::Jack, Suit::Clubs), c(Rank::Ace, Suit::Spades),
        ]).unwrap();
        assert_eq!(h.to_string(), "10 ♥, 2 ♦, J ♣, A ♠");
        assert_eq!(h.fmt_inline(true), "10-H, 2-D, J-C, A-S");
        assert_eq!(h.red_count(), 2);
    }
}
