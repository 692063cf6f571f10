//! `p2p-spread-scanner-rs`
//!
//! Fetch P2P advertisement quotes in two fiat markets and scan for cross-fiat
//! arbitrage opportunities.
//!
//! ## Quickstart (single scan)
//!
//! ```no_run
//! use p2p_spread_scanner_rs::{BinanceP2p, SpreadScanner};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), p2p_spread_scanner_rs::SpreadScannerError> {
//! let scanner = SpreadScanner::new(BinanceP2p::new());
//! let opportunities = scanner
//!     .scan(&["USDT", "BTC", "ETH"], "KES", "RWF", Decimal::from(3))
//!     .await?;
//!
//! for opp in &opportunities {
//!     println!(
//!         "{} {:?} buy={} sell={} profit={}%",
//!         opp.asset, opp.direction, opp.buy_price, opp.sell_price, opp.profit_percent
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (interval stream)
//!
//! ```no_run
//! use p2p_spread_scanner_rs::{BinanceP2p, SpreadScanner, stream_opportunities};
//! use rust_decimal::Decimal;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let scanner = SpreadScanner::new(BinanceP2p::new());
//! let mut rx = stream_opportunities(
//!     scanner,
//!     vec!["USDT".into(), "BTC".into()],
//!     "KES".into(),
//!     "RWF".into(),
//!     Decimal::from(3),
//!     Duration::from_secs(60),
//! );
//!
//! while let Some(batch) = rx.recv().await {
//!     println!("{} opportunities this tick", batch.len());
//! }
//! # }
//! ```

pub mod common;
pub mod scanner;
pub mod source;

// Re-export common types
pub use common::{Quote, Side, SpreadScannerError, create_http_client};
pub use scanner::{Direction, Opportunity, SpreadScanner, stream_opportunities};
pub use source::{BinanceP2p, PriceSource};
