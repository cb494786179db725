//! Coin selector domain.

use serde::{Deserialize, Serialize};

/// Coins the dashboard can chart against sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coin {
    Btc,
    Eth,
    Sol,
}

impl Coin {
    /// Selector cycling order.
    pub const ALL: [Coin; 3] = [Coin::Btc, Coin::Eth, Coin::Sol];

    pub fn label(&self) -> &'static str {
        match self {
            Coin::Btc => "BTC",
            Coin::Eth => "ETH",
            Coin::Sol => "SOL",
        }
    }

    /// Merged-table column holding this coin's next-day percentage return.
    pub fn return_column(&self) -> &'static str {
        match self {
            Coin::Btc => "btc_next_ret",
            Coin::Eth => "eth_next_ret",
            Coin::Sol => "sol_next_ret",
        }
    }

    pub fn next(&self) -> Coin {
        match self {
            Coin::Btc => Coin::Eth,
            Coin::Eth => Coin::Sol,
            Coin::Sol => Coin::Btc,
        }
    }

    pub fn prev(&self) -> Coin {
        match self {
            Coin::Btc => Coin::Sol,
            Coin::Eth => Coin::Btc,
            Coin::Sol => Coin::Eth,
        }
    }
}
