use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome { Win, Loss }

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub wins: usize,
    pub losses: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: Wins - {}, Losses - {}", self.wins, self.losses)
    }
}

/// Session-long results. Nothing clears it short of restarting the process.
#[derive(Debug, Default)]
pub struct ScoreTracker {
    history: Vec<Outcome>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.history.push(outcome);
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn summary(&self) -> Summary {
        let wins = self.history.iter().filter(|&&o| o == Outcome::Win).count();
        Summary { wins, losses: self.history.len() - wins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_wins_and_losses() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.summary(), Summary::default());
        score.record(Outcome::Win);
        score.record(Outcome::Loss);
        score.record(Outcome::Win);
        assert_eq!(score.summary(), Summary { wins: 2, losses: 1 });
        assert_eq!(score.history(), &[Outcome::Win, Outcome::Loss, Outcome::Win]);
        assert_eq!(score.summary().to_string(), "Score: Wins - 2, Losses - 1");
    }
}
