use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit { Hearts, Diamonds, Clubs, Spades }

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥", Suit::Diamonds => "♦", Suit::Clubs => "♣", Suit::Spades => "♠"
        }
    }

    pub fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H', Suit::Diamonds => 'D', Suit::Clubs => 'C', Suit::Spades => 'S'
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace=1, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King
    ];

    /// Points used by the sum pattern: pips at face value, pictures 10, ace 11.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            pip => pip as u32,
        }
    }

    pub fn is_picture(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    pub fn is_even(self) -> bool {
        matches!(self, Rank::Two | Rank::Four | Rank::Six | Rank::Eight | Rank::Ten)
    }

    pub fn is_odd(self) -> bool {
        matches!(self, Rank::Ace | Rank::Three | Rank::Five | Rank::Seven | Rank::Nine)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A", Rank::Two => "2", Rank::Three => "3", Rank::Four => "4",
            Rank::Five => "5", Rank::Six => "6", Rank::Seven => "7", Rank::Eight => "8",
            Rank::Nine => "9", Rank::Ten => "10", Rank::Jack => "J", Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// `10-H` style, for terminals that mangle the suit glyphs.
    pub fn fmt_ascii(&self) -> String {
        format!("{}-{}", self.rank.label(), self.suit.initial())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank.label(), self.suit.glyph())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("empty card")]
    Empty,
    #[error("unknown rank in '{0}'")]
    UnknownRank(String),
    #[error("unknown suit in '{0}'")]
    UnknownSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `AH`, `10d`, `q♠`, `10-H` and `10 ♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
        let last = compact.chars().last().ok_or(ParseCardError::Empty)?;
        let suit = match last.to_ascii_uppercase() {
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            'S' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::UnknownSuit(s.to_string())),
        };
        let rank_part = &compact[..compact.len() - last.len_utf8()];
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two, "3" => Rank::Three, "4" => Rank::Four, "5" => Rank::Five,
            "6" => Rank::Six, "7" => Rank::Seven, "8" => Rank::Eight, "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack, "Q" => Rank::Queen, "K" => Rank::King,
            _ => return Err(ParseCardError::UnknownRank(s.to_string())),
        };
        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_follow_sum_rules() {
        assert_eq!(Rank::Ace.value(), 11);
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Queen.value(), 10);
        let total: u32 = Rank::ALL.iter().map(|r| r.value()).sum();
        assert_eq!(total, 11 + (2..=10).sum::<u32>() + 30);
    }

    #[test]
    fn every_rank_is_even_or_odd_unless_picture() {
        for r in Rank::ALL {
            let classes = [r.is_even(), r.is_odd(), r.is_picture()];
            assert_eq!(classes.iter().filter(|&&b| b).count(), 1, "{:?}", r);
        }
    }

    #[test]
    fn displays_unicode_and_ascii() {
        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10 ♥");
        assert_eq!(c.fmt_ascii(), "10-H");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A ♠");
    }

    #[test]
    fn parses_common_spellings() {
        let ten_h = Card::new(Rank::Ten, Suit::Hearts);
        for s in ["10H", "10h", "th", "10-H", "10 ♥", "10♥"] {
            assert_eq!(s.parse::<Card>(), Ok(ten_h), "{}", s);
        }
        assert_eq!("q♠".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Spades)));
        assert_eq!("AD".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Diamonds)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert!(matches!("11H".parse::<Card>(), Err(ParseCardError::UnknownRank(_))));
        assert!(matches!("AX".parse::<Card>(), Err(ParseCardError::UnknownSuit(_))));
        assert!(matches!("H".parse::<Card>(), Err(ParseCardError::UnknownRank(_))));
    }
}
