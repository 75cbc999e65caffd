use crate::card::Card;
use crate::hand::Hand;
use crate::score::Outcome;

/// What a front end can ask the game to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    StartRound,
    SubmitSelection(Vec<Card>),
    RequestHint(String),
    SubmitGuess(String),
}

/// What the game reports back, in the order it should be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    RoundStarted,
    SelectionMatched(Vec<Card>),
    SelectionRetry(u8),
    SelectionExhausted(Hand),
    HintResult { pattern: String, matches: bool },
    GuessResult { outcome: Outcome, dealer: Hand },
    ScoreUpdated { wins: usize, losses: usize },
}
