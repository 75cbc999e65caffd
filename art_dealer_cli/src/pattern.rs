use std::collections::HashSet;
use std::fmt;

use crate::card::Rank;
use crate::error::GameError;
use crate::hand::Hand;

/// Shown in the pattern picker before anything is chosen. Never a registered name.
pub const NONE_CHOSEN: &str = "Select a Pattern";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    AllEven,
    AllOdd,
    SumOver25,
    TwoRedTwoBlack,
    AllDifferentSuits,
    ContainsAce,
    TwoPlusPicture,
}

impl Pattern {
    /// Registry order, which is also display order.
    pub const ALL: [Pattern; 7] = [
        Pattern::AllEven,
        Pattern::AllOdd,
        Pattern::SumOver25,
        Pattern::TwoRedTwoBlack,
        Pattern::AllDifferentSuits,
        Pattern::ContainsAce,
        Pattern::TwoPlusPicture,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::AllEven => "All Even Numbers",
            Pattern::AllOdd => "All Odd Numbers",
            Pattern::SumOver25 => "Sum of Values > 25",
            Pattern::TwoRedTwoBlack => "Two Reds and Two Blacks",
            Pattern::AllDifferentSuits => "All Different Suits",
            Pattern::ContainsAce => "Contains an Ace",
            Pattern::TwoPlusPicture => "At Least Two Picture Cards",
        }
    }

    pub fn from_name(name: &str) -> Option<Pattern> {
        Pattern::ALL.into_iter().find(|p| p.name() == name)
    }

    /// 1-based, matching the numbered list the console prints.
    pub fn from_position(n: usize) -> Option<Pattern> {
        n.checked_sub(1).and_then(|i| Pattern::ALL.get(i).copied())
    }

    pub fn matches(self, hand: &Hand) -> bool {
        let cards = hand.cards();
        match self {
            Pattern::AllEven => cards.iter().all(|c| c.rank.is_even()),
            Pattern::AllOdd => cards.iter().all(|c| c.rank.is_odd()),
            Pattern::SumOver25 => cards.iter().map(|c| c.rank.value()).sum::<u32>() > 25,
            Pattern::TwoRedTwoBlack => hand.red_count() == 2,
            Pattern::AllDifferentSuits => {
                cards.iter().map(|c| c.suit).collect::<HashSet<_>>().len() == 4
            }
            Pattern::ContainsAce => cards.iter().any(|c| c.rank == Rank::Ace),
            Pattern::TwoPlusPicture => cards.iter().filter(|c| c.rank.is_picture()).count() >= 2,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn names() -> impl Iterator<Item = &'static str> {
    Pattern::ALL.into_iter().map(Pattern::name)
}

pub fn evaluate(name: &str, hand: &Hand) -> Result<bool, GameError> {
    Pattern::from_name(name)
        .map(|p| p.matches(hand))
        .ok_or_else(|| GameError::UnknownPattern(name.to_string()))
}
