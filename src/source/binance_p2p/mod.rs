pub mod types;
use crate::common::{Quote, Side, SpreadScannerError, create_http_client, parse_decimal};
use crate::source::PriceSource;
use async_trait::async_trait;
use rust_decimal::Decimal;
use types::{AdvSearchRequest, AdvSearchResponse};

const P2P_API_BASE: &str = "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c";

pub struct BinanceP2p {
    client: reqwest::Client,
}

impl BinanceP2p {
    pub fn new() -> Self {
        Self {
            client: create_http_client(),
        }
    }

    /// Build against a caller-supplied client (custom timeout, proxy, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn search(
        &self,
        request: &AdvSearchRequest<'_>,
    ) -> Result<AdvSearchResponse, SpreadScannerError> {
        let url = format!("{}/adv/search", P2P_API_BASE);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpreadScannerError::ApiError(format!(
                "Binance P2P API error: {} - {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn health_check(&self) -> Result<(), SpreadScannerError> {
        // Minimal 1-row search - verifies connectivity to the P2P search API
        let request = AdvSearchRequest {
            asset: "USDT",
            fiat: "USD",
            trade_type: Side::Buy,
            page: 1,
            rows: 1,
            pay_types: Vec::new(),
        };
        self.search(&request)
            .await
            .map_err(|_| SpreadScannerError::HealthCheckFailed)?;

        Ok(())
    }
}

impl Default for BinanceP2p {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for BinanceP2p {
    async fn quote(
        &self,
        asset: &str,
        fiat: &str,
        side: Side,
    ) -> Result<Quote, SpreadScannerError> {
        if asset.is_empty() || fiat.is_empty() {
            return Err(SpreadScannerError::InvalidInput(
                "Asset and fiat cannot be empty".to_string(),
            ));
        }

        let request = AdvSearchRequest {
            asset,
            fiat,
            trade_type: side,
            page: 1,
            rows: 1,
            pay_types: Vec::new(),
        };

        let response = self.search(&request).await?;

        let adv = response
            .data
            .into_iter()
            .next()
            .map(|entry| entry.adv)
            .ok_or_else(|| unavailable(asset, fiat, side))?;

        let price = parse_decimal(&adv.price, "price")?;
        // A zero or negative advertised price is invalid data, not a real quote
        if price <= Decimal::ZERO {
            return Err(unavailable(asset, fiat, side));
        }

        let trade_methods = adv
            .trade_methods
            .into_iter()
            .filter_map(|method| method.trade_method_name.or(method.identifier))
            .collect();

        Ok(Quote {
            price,
            adv_no: adv.adv_no,
            trade_methods,
        })
    }
}

fn unavailable(asset: &str, fiat: &str, side: Side) -> SpreadScannerError {
    SpreadScannerError::QuoteUnavailable(format!("{}/{} {}", asset, fiat, side.as_str()))
}
