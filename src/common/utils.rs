// src/common/utils.rs
use crate::common::SpreadScannerError;
use rust_decimal::Decimal;

// Parse a string to a Decimal, return a SpreadScannerError if the parsing fails
pub fn parse_decimal(value: &str, field_name: &str) -> Result<Decimal, SpreadScannerError> {
    value
        .parse::<Decimal>()
        .map_err(|_| SpreadScannerError::ApiError(format!("Invalid {} format", field_name)))
}

// Round a profit percentage to 2 decimal places
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp(2)
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
