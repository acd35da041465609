use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{is_digits, Console, InputError, NOT_A_NUMBER};
use crate::rng::GameRng;

/// Runs the number-guessing game. The range prompt is read once and ends
/// the session on invalid input instead of retrying; the guess prompt
/// retries like every other numeric prompt.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rng: &mut GameRng,
) -> Result<(), InputError> {
    let reply = console.read_reply("Upper bound for the secret number: ")?;
    if !is_digits(&reply) {
        console.say("Please enter a number next time.")?;
        return Ok(());
    }
    let bound = match reply.parse::<u64>() {
        Ok(bound) if bound > 0 => bound,
        _ => {
            console.say("Please enter a number larger than zero next time.")?;
            return Ok(());
        }
    };

    let target = rng.int_inclusive(1, bound);
    debug!(bound, "target drawn");
    loop {
        let guess = console.prompt_int("Make a guess: ", 0, u64::MAX, NOT_A_NUMBER)?;
        if guess == target {
            console.say("You got it!")?;
            return Ok(());
        } else if guess > target {
            console.say("You were above the number!")?;
        } else {
            console.say("You were below the number!")?;
        }
    }
}
