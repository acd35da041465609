use std::fmt;

use crate::paytable::Paytable;
use crate::rng::GameRng;
use crate::symbols::{ReelConfig, Symbol};

#[derive(Debug, Clone)]
pub struct EngineParams {
    pub reels: ReelConfig,
    pub paytable: Paytable,
}

impl EngineParams {
    pub fn default_3x3() -> Self {
        Self {
            reels: ReelConfig::default_3x3(),
            paytable: Paytable::simple_default(),
        }
    }
}

/// One spin's symbols, stored column-major and discarded after evaluation
/// and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> Self {
        Self { columns }
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    pub fn at(&self, row: usize, col: usize) -> Symbol {
        self.columns[col][row]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.cols() {
                if col > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", self.at(row, col))?;
            }
        }
        Ok(())
    }
}

/// Fills a grid column by column. Every column draws from its own fresh
/// copy of the pool without replacement, so one column cannot use a symbol
/// instance twice while repeats across columns stay possible.
pub fn draw_grid(rng: &mut GameRng, config: &ReelConfig) -> Grid {
    let pool = config.pool();
    let mut columns = Vec::with_capacity(config.cols);
    for _ in 0..config.cols {
        let mut remaining = pool.clone();
        let mut column = Vec::with_capacity(config.rows);
        for _ in 0..config.rows {
            let drawn = remaining.swap_remove(rng.index(remaining.len()));
            column.push(drawn);
        }
        columns.push(column);
    }
    Grid::from_columns(columns)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinResult {
    pub winnings: u64,
    /// 1-based, ascending.
    pub winning_lines: Vec<usize>,
}

/// A line wins iff every column holds the identical symbol at that row; it
/// pays the symbol's multiplier times the per-line bet. Only the first
/// `lines` rows are evaluated.
pub fn evaluate_lines(grid: &Grid, lines: u64, bet: u64, paytable: &Paytable) -> WinResult {
    let mut winnings = 0;
    let mut winning_lines = Vec::new();
    for line in 0..lines as usize {
        let symbol = grid.at(line, 0);
        if (1..grid.cols()).all(|col| grid.at(line, col) == symbol) {
            winnings += paytable.multiplier(symbol) * bet;
            winning_lines.push(line + 1);
        }
    }
    WinResult {
        winnings,
        winning_lines,
    }
}

#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub grid: Grid,
    pub winnings: u64,
    pub winning_lines: Vec<usize>,
}

pub fn spin_once(rng: &mut GameRng, params: &EngineParams, bet: u64, lines: u64) -> SpinOutcome {
    let grid = draw_grid(rng, &params.reels);
    let win = evaluate_lines(&grid, lines, bet, &params.paytable);
    SpinOutcome {
        grid,
        winnings: win.winnings,
        winning_lines: win.winning_lines,
    }
}
