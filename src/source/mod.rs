use crate::common::{Quote, Side, SpreadScannerError};
use async_trait::async_trait;

pub mod binance_p2p;
pub use binance_p2p::BinanceP2p;

// Common price source trait definition
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch one representative advertisement for the (asset, fiat, side) triple.
    ///
    /// Returns [`SpreadScannerError::QuoteUnavailable`] when no usable
    /// advertisement exists. Callers that can tolerate a missing leg treat any
    /// error from this method as "no quote".
    async fn quote(&self, asset: &str, fiat: &str, side: Side)
    -> Result<Quote, SpreadScannerError>;
}
