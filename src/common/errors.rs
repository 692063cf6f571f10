#[derive(thiserror::Error, Debug)]
pub enum SpreadScannerError {
    #[error("Health check failed")]
    HealthCheckFailed,

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No quote available: {0}")]
    QuoteUnavailable(String),

    #[error("Reference conversion rate unavailable")]
    RateUnavailable,
}
