use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{Console, InputError};
use crate::engine::{spin_once, EngineParams};
use crate::rng::GameRng;

pub const MAX_LINES: u64 = 3;
pub const MIN_BET: u64 = 10;
pub const MAX_BET: u64 = 100;

/// Runs a full slot-machine session: one deposit, then spin/quit rounds
/// until `q` or end of input. Returns the final balance.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut GameRng,
    params: &EngineParams,
) -> Result<u64, InputError> {
    let mut balance = console.prompt_int(
        "Amount to deposit: $",
        1,
        u64::MAX,
        "Please enter an amount greater than 0.",
    )?;
    loop {
        console.say(&format!("Your current balance is ${balance}"))?;
        let reply = match console.read_reply("Press enter to spin (q to quit): ") {
            Ok(reply) => reply,
            Err(InputError::Closed) => break,
            Err(err) => return Err(err),
        };
        if reply == "q" {
            break;
        }
        let net = spin(console, rng, params, balance)?;
        balance = balance.saturating_add_signed(net);
    }
    console.say(&format!("You leave with ${balance}"))?;
    Ok(balance)
}

/// One spin: solicit the bet, roll and show the grid, report the wins, and
/// return the net change (winnings minus wager) for the caller to apply.
/// The wager is re-solicited until it fits the balance; the line count is
/// asked only once.
fn spin<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut GameRng,
    params: &EngineParams,
    balance: u64,
) -> Result<i64, InputError> {
    let lines = console.prompt_int(
        &format!("Lines to bet on (1-{MAX_LINES}): "),
        1,
        MAX_LINES,
        &format!("Please enter a number between 1 and {MAX_LINES}."),
    )?;
    let (bet, wager) = loop {
        let bet = console.prompt_int(
            &format!("Bet per line (${MIN_BET}-${MAX_BET}): $"),
            MIN_BET,
            MAX_BET,
            &format!("Bet must be between ${MIN_BET} and ${MAX_BET}."),
        )?;
        let wager = lines * bet;
        if wager > balance {
            console.say(&format!(
                "You do not have enough for that wager, your current balance is ${balance}"
            ))?;
        } else {
            break (bet, wager);
        }
    };
    console.say(&format!(
        "Betting ${bet} on {lines} lines. Total wager: ${wager}"
    ))?;

    let outcome = spin_once(rng, params, bet, lines);
    console.say(&outcome.grid.to_string())?;
    console.say(&format!("You won ${}.", outcome.winnings))?;
    if outcome.winning_lines.is_empty() {
        console.say("No winning lines.")?;
    } else {
        let listed: Vec<String> = outcome
            .winning_lines
            .iter()
            .map(ToString::to_string)
            .collect();
        console.say(&format!("Winning lines: {}", listed.join(", ")))?;
    }
    debug!(winnings = outcome.winnings, wager, "spin settled");
    Ok(outcome.winnings as i64 - wager as i64)
}
