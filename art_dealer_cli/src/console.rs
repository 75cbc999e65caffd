use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::card::{Card, ParseCardError};
use crate::event::{Event, Intent};
use crate::game::{Game, Hint, Phase};
use crate::hand::{fmt_cards, HAND_SIZE};
use crate::pattern::{self, Pattern, NONE_CHOSEN};
use crate::score::{Outcome, Summary};

const HELP: &str = "\
Commands:
  new                     start a new round
  pick <c1> <c2> <c3> <c4> choose your four cards, e.g. pick AH 10D QC 3S
  hint <n|name>           ask whether the dealer's hand fits a pattern
  guess <n|name>          bet on a pattern and reveal the dealer's hand
  patterns                list the patterns
  hand                    show both hands
  score                   show wins and losses
  quit                    leave the table";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Intent),
    Patterns,
    Hand,
    Score,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, Error)]
enum CommandError {
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// Numbers pick from the printed list; names match case-insensitively; nothing means "none chosen".
fn resolve_pattern(arg: &str) -> String {
    let arg = arg.trim();
    if arg.is_empty() {
        return NONE_CHOSEN.to_string();
    }
    if let Some(p) = arg.parse::<usize>().ok().and_then(Pattern::from_position) {
        return p.name().to_string();
    }
    pattern::names()
        .find(|n| n.eq_ignore_ascii_case(arg))
        .map_or_else(|| arg.to_string(), str::to_string)
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match word.to_lowercase().as_str() {
        "new" => Ok(Command::Play(Intent::StartRound)),
        "pick" => {
            let cards = rest.split_whitespace()
                .map(str::parse::<Card>)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Play(Intent::SubmitSelection(cards)))
        }
        "hint" => Ok(Command::Play(Intent::RequestHint(resolve_pattern(rest)))),
        "guess" => Ok(Command::Play(Intent::SubmitGuess(resolve_pattern(rest)))),
        "patterns" => Ok(Command::Patterns),
        "hand" => Ok(Command::Hand),
        "score" => Ok(Command::Score),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

pub struct Console<R, W> {
    game: Game,
    input: R,
    out: W,
    ascii: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(game: Game, input: R, out: W, ascii: bool) -> Self {
        Self { game, input, out, ascii }
    }

    /// Deals the first round, then serves commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Art Dealer - A Game of Deduction")?;
        self.dispatch(Intent::StartRound)?;
        while let Some(line) = self.read_line("> ")? {
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Play(intent)) => self.dispatch(intent)?,
                Ok(Command::Patterns) => self.show_patterns()?,
                Ok(Command::Hand) => self.show_hands()?,
                Ok(Command::Score) => self.show_score()?,
                Ok(Command::Help) => writeln!(self.out, "{}", HELP)?,
                Ok(Command::Quit) => break,
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            }
        }
        writeln!(self.out, "Final {}", self.game.score().summary())?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        match self.input.read_line(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf)),
        }
    }

    fn dispatch(&mut self, intent: Intent) -> io::Result<()> {
        match self.game.handle(intent) {
            Ok(events) => events.iter().try_for_each(|e| self.render(e)),
            Err(e) => writeln!(self.out, "Error: {}", e),
        }
    }

    fn render(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::RoundStarted => {
                writeln!(self.out, "--- NEW ROUND ---")?;
                writeln!(self.out, "Art Dealer's hand: {}", ["[Hidden]"; HAND_SIZE].join(" "))?;
                writeln!(self.out, "Pick exactly {} cards, e.g. 'pick AH 10D QC 3S'.", HAND_SIZE)?;
            }
            Event::SelectionMatched(matches) => {
                writeln!(
                    self.out,
                    "Match Found! {} of your cards matched the dealer's hand: {}",
                    matches.len(),
                    fmt_cards(matches, self.ascii)
                )?;
                self.show_player()?;
            }
            Event::SelectionRetry(remaining) => {
                writeln!(
                    self.out,
                    "No cards matched the dealer's hand. Please try again. You have {} attempt(s) left.",
                    remaining
                )?;
            }
            Event::SelectionExhausted(hand) => {
                writeln!(
                    self.out,
                    "No cards matched and you are out of re-selection attempts. Your hand is now locked."
                )?;
                writeln!(self.out, "Your hand: {}", hand.fmt_inline(self.ascii))?;
            }
            Event::HintResult { pattern, matches } => {
                let hint = Hint { pattern: pattern.clone(), matches: *matches };
                writeln!(self.out, "{}", hint)?;
            }
            Event::GuessResult { outcome, dealer } => {
                writeln!(self.out, "Art Dealer's hand: {}", dealer.fmt_inline(self.ascii))?;
                match outcome {
                    Outcome::Win => writeln!(self.out, "You guessed correctly! You Win!")?,
                    Outcome::Loss => writeln!(
                        self.out,
                        "Sorry, that's not right. The hand was: {}",
                        dealer.fmt_inline(self.ascii)
                    )?,
                }
            }
            Event::ScoreUpdated { wins, losses } => {
                writeln!(self.out, "{}", Summary { wins: *wins, losses: *losses })?;
            }
        }
        Ok(())
    }

    fn show_patterns(&mut self) -> io::Result<()> {
        for (i, name) in pattern::names().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, name)?;
        }
        Ok(())
    }

    fn show_player(&mut self) -> io::Result<()> {
        let line = match self.game.round().and_then(|r| r.player_hand()) {
            Some(h) => h.fmt_inline(self.ascii),
            None => (1..=HAND_SIZE).map(|i| format!("[Card {}]", i)).collect::<Vec<_>>().join(" "),
        };
        writeln!(self.out, "Your hand: {}", line)
    }

    fn show_hands(&mut self) -> io::Result<()> {
        let Some(round) = self.game.round() else {
            return writeln!(self.out, "No round in progress.");
        };
        let dealer = match round.revealed_dealer() {
            Some(h) => h.fmt_inline(self.ascii),
            None => ["[Hidden]"; HAND_SIZE].join(" "),
        };
        let status = match self.game.phase() {
            Phase::Selecting => format!("{} re-selection attempt(s) used", round.attempts()),
            Phase::Locked(_) => "hand locked, ask for hints or make your guess".to_string(),
            Phase::Resolved(_) => "round over, type 'new' to play again".to_string(),
            Phase::NotStarted => String::new(),
        };
        let hint = round.last_hint().unwrap_or("Hint will appear here.").to_string();
        writeln!(self.out, "Art Dealer's hand: {}", dealer)?;
        self.show_player()?;
        writeln!(self.out, "{}", hint)?;
        writeln!(self.out, "({})", status)
    }

    fn show_score(&mut self) -> io::Result<()> {
        let history: Vec<&str> = self.game.score().history().iter()
            .map(|o| match o { Outcome::Win => "W", Outcome::Loss => "L" })
            .collect();
        writeln!(self.out, "{}", self.game.score().summary())?;
        if !history.is_empty() {
            writeln!(self.out, "History: {}", history.join(" "))?;
        }
        Ok(())
    }
}
