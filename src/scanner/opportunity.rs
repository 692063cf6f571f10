use crate::common::Quote;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which way funds flow between the two fiat markets of a scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Buy in the first fiat, sell in the second.
    Forward,
    /// Buy in the second fiat, sell in the first.
    Reverse,
}

/// A qualifying cross-fiat spread found during a scan.
///
/// Computed fresh on every scan and never mutated afterwards. Callers that
/// alert or place orders consume the returned batch; the scanner itself never
/// acts on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub asset: String,
    pub direction: Direction,
    /// Advertised price on the buy leg, in the buy-side fiat
    pub buy_price: Decimal,
    /// Advertised price on the sell leg, in the sell-side fiat
    pub sell_price: Decimal,
    /// Profit relative to the converted buy cost, rounded to 2 decimals
    pub profit_percent: Decimal,
    /// Full buy-leg advertisement
    pub buy_quote: Quote,
    /// Full sell-leg advertisement
    pub sell_quote: Quote,
    pub timestamp: u64,
}
