use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    A,
    B,
    C,
    D,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw-pool weights and grid shape for one machine.
///
/// Each column draws `rows` symbols from its own fresh copy of the pool
/// without replacement, so a configuration must keep the total pool size at
/// least `rows`; smaller pools leave the draw undefined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelConfig {
    pub counts: Vec<(Symbol, u32)>,
    pub rows: usize,
    pub cols: usize,
}

impl ReelConfig {
    pub fn default_3x3() -> Self {
        Self {
            counts: vec![
                (Symbol::A, 3),
                (Symbol::B, 5),
                (Symbol::C, 5),
                (Symbol::D, 6),
            ],
            rows: 3,
            cols: 3,
        }
    }

    /// Expands the per-symbol counts into one column's draw pool.
    pub fn pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::new();
        for &(symbol, count) in &self.counts {
            for _ in 0..count {
                pool.push(symbol);
            }
        }
        pool
    }
}
