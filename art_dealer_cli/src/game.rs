use std::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::event::{Event, Intent};
use crate::hand::{Hand, HAND_SIZE};
use crate::pattern::{self, NONE_CHOSEN};
use crate::score::{Outcome, ScoreTracker};
use crate::selection::{self, SelectionOutcome};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Lock { ByMatch, ByExhaustion }

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    NotStarted,
    Selecting,
    Locked(Lock),
    Resolved(Outcome),
}

#[derive(Clone, Debug)]
pub struct Round {
    dealer: Hand,
    player: Option<Hand>,
    attempts: u8,
    lock: Option<Lock>,
    hint: Option<String>,
    result: Option<Outcome>,
}

impl Round {
    fn new(dealer: Hand) -> Self {
        Self { dealer, player: None, attempts: 0, lock: None, hint: None, result: None }
    }

    pub fn player_hand(&self) -> Option<&Hand> {
        self.player.as_ref()
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn last_hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Only available once the guess has revealed it.
    pub fn revealed_dealer(&self) -> Option<&Hand> {
        self.result.map(|_| &self.dealer)
    }

    pub fn phase(&self) -> Phase {
        match (self.lock, self.result) {
            (_, Some(outcome)) => Phase::Resolved(outcome),
            (Some(lock), None) => Phase::Locked(lock),
            (None, None) => Phase::Selecting,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub pattern: String,
    pub matches: bool,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.matches { "DOES" } else { "DOES NOT" };
        write!(f, "Hint: The dealer's hand {} match the '{}' pattern.", verb, self.pattern)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    pub outcome: Outcome,
    pub dealer: Hand,
}

pub struct Game {
    deck: Deck,
    round: Option<Round>,
    score: ScoreTracker,
}

impl Game {
    pub fn new(deck: Deck) -> Self {
        Self { deck, round: None, score: ScoreTracker::new() }
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::NotStarted, Round::phase)
    }

    /// Throws away whatever round was in progress. The score is kept.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        let dealer = Hand::new(&self.deck.draw(HAND_SIZE)?)?;
        log::info!("new round");
        log::debug!("secret dealer hand: {}", dealer.fmt_inline(true));
        self.round = Some(Round::new(dealer));
        Ok(())
    }

    pub fn submit_selection(&mut self, cards: &[Card]) -> Result<SelectionOutcome, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotStarted)?;
        if round.lock.is_some() {
            return Err(GameError::RoundLocked);
        }
        let outcome = selection::submit(cards, &round.dealer, round.attempts)?;
        match &outcome {
            SelectionOutcome::Matched { hand, matches } => {
                log::info!("selection matched {} card(s), hand locked", matches.len());
                round.player = Some(hand.clone());
                round.lock = Some(Lock::ByMatch);
            }
            SelectionOutcome::Retry { attempts, remaining } => {
                log::info!("selection missed, {} attempt(s) left", remaining);
                round.attempts = *attempts;
            }
            SelectionOutcome::Exhausted { hand, attempts } => {
                log::info!("selection missed, out of attempts, hand locked");
                round.attempts = *attempts;
                round.player = Some(hand.clone());
                round.lock = Some(Lock::ByExhaustion);
            }
        }
        Ok(outcome)
    }

    /// Tests the dealer's hand, not the player's, without revealing it.
    pub fn request_hint(&mut self, name: &str) -> Result<Hint, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotStarted)?;
        if round.player.is_none() {
            return Err(GameError::NoHandChosen);
        }
        let matches = evaluate_chosen(name, &round.dealer)?;
        let hint = Hint { pattern: name.to_string(), matches };
        round.hint = Some(hint.to_string());
        Ok(hint)
    }

    /// Scores the guess once and reveals the dealer's hand whatever the outcome.
    pub fn submit_guess(&mut self, name: &str) -> Result<Guess, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotStarted)?;
        if round.player.is_none() {
            return Err(GameError::NoHandChosen);
        }
        if round.result.is_some() {
            return Err(GameError::RoundResolved);
        }
        let outcome = if evaluate_chosen(name, &round.dealer)? { Outcome::Win } else { Outcome::Loss };
        round.result = Some(outcome);
        self.score.record(outcome);
        log::info!("guess '{}' scored {:?}; {}", name, outcome, self.score.summary());
        Ok(Guess { outcome, dealer: round.dealer.clone() })
    }

    pub fn handle(&mut self, intent: Intent) -> Result<Vec<Event>, GameError> {
        let result = match intent {
            Intent::StartRound => self.start_round().map(|()| vec![Event::RoundStarted]),
            Intent::SubmitSelection(cards) => self.submit_selection(&cards).map(|outcome| {
                vec![match outcome {
                    SelectionOutcome::Matched { matches, .. } => Event::SelectionMatched(matches),
                    SelectionOutcome::Retry { remaining, .. } => Event::SelectionRetry(remaining),
                    SelectionOutcome::Exhausted { hand, .. } => Event::SelectionExhausted(hand),
                }]
            }),
            Intent::RequestHint(name) => self.request_hint(&name).map(|hint| {
                vec![Event::HintResult { pattern: hint.pattern, matches: hint.matches }]
            }),
            Intent::SubmitGuess(name) => self.submit_guess(&name).map(|guess| {
                let summary = self.score.summary();
                vec![
                    Event::GuessResult { outcome: guess.outcome, dealer: guess.dealer },
                    Event::ScoreUpdated { wins: summary.wins, losses: summary.losses },
                ]
            }),
        };
        if let Err(e) = &result {
            log::warn!("rejected: {}", e);
        }
        result
    }
}

fn evaluate_chosen(name: &str, dealer: &Hand) -> Result<bool, GameError> {
    if name == NONE_CHOSEN {
        return Err(GameError::NoPatternSelected);
    }
    pattern::evaluate(name, dealer)
}
