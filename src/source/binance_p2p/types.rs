use crate::common::Side;
use serde::{Deserialize, Serialize};

/// Request body for the P2P advertisement search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvSearchRequest<'a> {
    pub asset: &'a str,
    pub fiat: &'a str,
    pub trade_type: Side,
    pub page: u32,
    pub rows: u32,
    pub pay_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdvSearchResponse {
    #[serde(default)]
    pub data: Vec<AdvEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AdvEntry {
    pub adv: Adv,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adv {
    /// Decimal string, e.g. "129.50"
    pub price: String,
    pub adv_no: String,
    #[serde(default)]
    pub trade_methods: Vec<TradeMethod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeMethod {
    #[serde(default)]
    pub trade_method_name: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
}
