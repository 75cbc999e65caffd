use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;

/// Misses allowed before the hand locks without a match.
pub const MAX_RESELECTIONS: u8 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// At least one picked card is in the dealer's hand; the pick becomes the player hand.
    Matched { hand: Hand, matches: Vec<Card> },
    /// No overlap, attempts left.
    Retry { attempts: u8, remaining: u8 },
    /// No overlap and the budget is spent; the pick is locked in as-is.
    Exhausted { hand: Hand, attempts: u8 },
}

/// Checks one pick against the dealer's hand. `attempts` is the number of misses so far.
pub fn submit(selected: &[Card], dealer: &Hand, attempts: u8) -> Result<SelectionOutcome, GameError> {
    let hand = Hand::new(selected)?;
    let matches = hand.shared_with(dealer);
    if !matches.is_empty() {
        return Ok(SelectionOutcome::Matched { hand, matches });
    }
    let attempts = attempts.saturating_add(1).min(MAX_RESELECTIONS);
    if attempts >= MAX_RESELECTIONS {
        Ok(SelectionOutcome::Exhausted { hand, attempts })
    } else {
        Ok(SelectionOutcome::Retry { attempts, remaining: MAX_RESELECTIONS - attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(spec: [&str; 4]) -> Vec<Card> {
        spec.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn dealer() -> Hand {
        Hand::new(&cards(["AH", "7D", "QC", "3S"])).unwrap()
    }

    #[test]
    fn single_overlap_matches_on_first_try() {
        let pick = cards(["2H", "7D", "9C", "KS"]);
        match submit(&pick, &dealer(), 0).unwrap() {
            SelectionOutcome::Matched { hand, matches } => {
                assert_eq!(hand.cards(), pick.as_slice());
                assert_eq!(matches, vec!["7D".parse().unwrap()]);
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn misses_count_down_then_exhaust() {
        let d = dealer();
        let miss = cards(["2H", "4D", "6C", "8S"]);
        assert_eq!(
            submit(&miss, &d, 0).unwrap(),
            SelectionOutcome::Retry { attempts: 1, remaining: 2 }
        );
        assert_eq!(
            submit(&miss, &d, 1).unwrap(),
            SelectionOutcome::Retry { attempts: 2, remaining: 1 }
        );
        assert_eq!(
            submit(&miss, &d, 2).unwrap(),
            SelectionOutcome::Exhausted { hand: Hand::new(&miss).unwrap(), attempts: 3 }
        );
    }

    #[test]
    fn match_on_last_attempt_still_matches() {
        let pick = cards(["AH", "4D", "6C", "8S"]);
        assert!(matches!(submit(&pick, &dealer(), 2).unwrap(), SelectionOutcome::Matched { .. }));
    }

    #[test]
    fn wrong_size_is_not_an_attempt() {
        let three: Vec<Card> = cards(["2H", "4D", "6C", "8S"]).into_iter().take(3).collect();
        assert_eq!(submit(&three, &dealer(), 0), Err(GameError::InvalidSelectionSize(3)));
    }
}
