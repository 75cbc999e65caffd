use thiserror::Error;

/// Every way a game operation can be refused. None of them leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    InvalidDrawSize { requested: usize, available: usize },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("you must select exactly 4 different cards (got {0})")]
    InvalidSelectionSize(usize),

    #[error("you must choose your hand before asking for a hint or making a guess")]
    NoHandChosen,

    #[error("please select a pattern first")]
    NoPatternSelected,

    #[error("no round in progress; start a new round")]
    RoundNotStarted,

    #[error("your hand is locked for this round")]
    RoundLocked,

    #[error("this round is already resolved; start a new round")]
    RoundResolved,
}
