pub mod client;
pub mod errors;
pub mod quote;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use errors::SpreadScannerError;
pub use quote::{Quote, Side};
pub use utils::{get_timestamp_millis, parse_decimal, round_percent};
