use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{Console, InputError};
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

pub const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

impl Move {
    /// Parses an already-lowercased token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Cyclic dominance: rock beats scissors, scissors beats paper, paper
    /// beats rock.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

pub fn round_outcome(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Draw
    } else if user.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    pub user: u64,
    pub computer: u64,
}

impl ScoreTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.user += 1,
            Outcome::Loss => self.computer += 1,
            Outcome::Draw => {}
        }
    }
}

/// Runs rounds until `q` (or end of input) and returns the final tally.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut GameRng,
) -> Result<ScoreTally, InputError> {
    let mut tally = ScoreTally::default();
    loop {
        let reply = match console.read_reply("Type rock/paper/scissors (q to quit): ") {
            Ok(reply) => reply.to_lowercase(),
            Err(InputError::Closed) => break,
            Err(err) => return Err(err),
        };
        if reply == "q" {
            break;
        }
        // Unrecognized moves re-prompt without a message.
        let Some(user) = Move::parse(&reply) else {
            continue;
        };
        let computer = *rng.pick(&MOVES);
        console.say(&format!("The computer picked {computer}."))?;
        let outcome = round_outcome(user, computer);
        match outcome {
            Outcome::Win => console.say("You won!")?,
            Outcome::Draw => console.say("Draw.")?,
            Outcome::Loss => console.say("You lost!")?,
        }
        tally.record(outcome);
        debug!(?outcome, "round settled");
    }
    console.say(&format!(
        "You won {} times and the computer won {} times.",
        tally.user, tally.computer
    ))?;
    console.say("Goodbye!")?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_table() {
        assert_eq!(round_outcome(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(round_outcome(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(round_outcome(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(round_outcome(Move::Rock, Move::Paper), Outcome::Loss);
        assert_eq!(round_outcome(Move::Paper, Move::Scissors), Outcome::Loss);
        assert_eq!(round_outcome(Move::Scissors, Move::Rock), Outcome::Loss);
        for mv in MOVES {
            assert_eq!(round_outcome(mv, mv), Outcome::Draw);
        }
    }

    #[test]
    fn tally_counts_exactly_one_outcome_per_round() {
        let mut tally = ScoreTally::default();
        tally.record(Outcome::Win);
        tally.record(Outcome::Draw);
        tally.record(Outcome::Loss);
        tally.record(Outcome::Loss);
        assert_eq!(tally, ScoreTally { user: 1, computer: 2 });
    }

    #[test]
    fn parse_accepts_only_the_three_moves() {
        assert_eq!(Move::parse("rock"), Some(Move::Rock));
        assert_eq!(Move::parse("paper"), Some(Move::Paper));
        assert_eq!(Move::parse("scissors"), Some(Move::Scissors));
        assert_eq!(Move::parse("rok"), None);
        assert_eq!(Move::parse("q"), None);
        assert_eq!(Move::parse(""), None);
    }
}
