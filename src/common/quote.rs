use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of an advertisement to fetch.
///
/// Serialized as the `tradeType` value the P2P search API expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

/// A single representative price advertisement for an (asset, fiat, side) triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// Advertised unit price in the fiat currency. Always > 0.
    pub price: Decimal,
    /// Opaque advertisement identifier, used by callers that place orders.
    pub adv_no: String,
    /// Accepted payment methods, in the order reported by the source.
    pub trade_methods: Vec<String>,
}
