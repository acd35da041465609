pub mod console;
pub mod engine;
pub mod guess;
pub mod paytable;
pub mod rng;
pub mod rps;
pub mod session;
pub mod symbols;

pub use crate::console::{is_digits, Console, InputError};
pub use crate::engine::{
    draw_grid, evaluate_lines, spin_once, EngineParams, Grid, SpinOutcome, WinResult,
};
pub use crate::paytable::{Paytable, PaytableEntry};
pub use crate::rng::GameRng;
pub use crate::rps::{round_outcome, Move, Outcome, ScoreTally, MOVES};
pub use crate::symbols::{ReelConfig, Symbol};
