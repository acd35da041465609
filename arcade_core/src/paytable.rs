use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub payout_multiplier: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    pub fn simple_default() -> Self {
        Self(vec![
            PaytableEntry {
                symbol: Symbol::A,
                payout_multiplier: 3,
            },
            PaytableEntry {
                symbol: Symbol::B,
                payout_multiplier: 4,
            },
            PaytableEntry {
                symbol: Symbol::C,
                payout_multiplier: 5,
            },
            PaytableEntry {
                symbol: Symbol::D,
                payout_multiplier: 2,
            },
        ])
    }

    /// Payout multiplier for a winning line of `symbol`; unlisted symbols
    /// pay nothing.
    pub fn multiplier(&self, symbol: Symbol) -> u64 {
        self.0
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.payout_multiplier)
            .unwrap_or(0)
    }
}
