use crate::common::{Quote, Side, SpreadScannerError, get_timestamp_millis, round_percent};
use crate::source::PriceSource;
use futures::future::join_all;
use rust_decimal::Decimal;

mod opportunity;
pub mod watcher;
pub use opportunity::{Direction, Opportunity};
pub use watcher::stream_opportunities;

const DEFAULT_REFERENCE_ASSET: &str = "USDT";

/// Spread scanner - fetches P2P advertisement quotes in two fiat markets and
/// finds cross-fiat arbitrage opportunities
pub struct SpreadScanner<S> {
    source: S,
    reference_asset: String,
}

impl<S: PriceSource> SpreadScanner<S> {
    /// Scanner over the given price source, using USDT as the reference asset
    /// for the cross-fiat conversion rate.
    pub fn new(source: S) -> Self {
        Self {
            source,
            reference_asset: DEFAULT_REFERENCE_ASSET.to_string(),
        }
    }

    /// Override the reference asset used to derive the conversion rate.
    pub fn with_reference_asset(mut self, asset: impl Into<String>) -> Self {
        self.reference_asset = asset.into();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scans both directions of every asset between the two fiat markets and
    /// returns the opportunities whose profit meets the threshold
    ///
    /// # Arguments
    /// * `assets` - Assets to scan (e.g., `["USDT", "BTC"]`); must be non-empty
    /// * `fiat_a` - First fiat currency (e.g., "KES")
    /// * `fiat_b` - Second fiat currency (e.g., "RWF")
    /// * `threshold` - Minimum profit percentage; may be zero or negative
    ///
    /// # Returns
    /// Opportunities in supplied-asset order, Forward before Reverse per asset.
    /// Profit is measured against the converted buy cost in the sell-side fiat
    /// and rounded to 2 decimal places.
    ///
    /// A missing or failed quote skips only the affected direction. If either
    /// reference quote is unavailable the scan fails with
    /// [`SpreadScannerError::RateUnavailable`] rather than guessing a rate.
    pub async fn scan(
        &self,
        assets: &[&str],
        fiat_a: &str,
        fiat_b: &str,
        threshold: Decimal,
    ) -> Result<Vec<Opportunity>, SpreadScannerError> {
        if assets.is_empty() {
            return Err(SpreadScannerError::InvalidInput(
                "At least one asset required".to_string(),
            ));
        }

        let rate = self.conversion_rate(fiat_a, fiat_b).await?;
        tracing::debug!(fiat_a, fiat_b, %rate, "derived conversion rate");

        // All per-asset legs are independent reads; fetch them in parallel and
        // aggregate in supplied-asset order once every leg has resolved.
        let scans: Vec<_> = assets
            .iter()
            .map(|asset| self.scan_asset(asset, fiat_a, fiat_b, rate, threshold))
            .collect();
        let results = join_all(scans).await;

        Ok(results.into_iter().flatten().collect())
    }

    /// Derives the fiatB-per-fiatA rate from reference asset Buy quotes.
    async fn conversion_rate(
        &self,
        fiat_a: &str,
        fiat_b: &str,
    ) -> Result<Decimal, SpreadScannerError> {
        let (ref_a, ref_b) = tokio::join!(
            self.leg(&self.reference_asset, fiat_a, Side::Buy),
            self.leg(&self.reference_asset, fiat_b, Side::Buy),
        );

        match (ref_a, ref_b) {
            (Some(quote_a), Some(quote_b)) => Ok(quote_b.price / quote_a.price),
            _ => Err(SpreadScannerError::RateUnavailable),
        }
    }

    /// Evaluates both directions for one asset. Quote prices are compared in
    /// the sell-side fiat by converting the buy cost through `rate`.
    async fn scan_asset(
        &self,
        asset: &str,
        fiat_a: &str,
        fiat_b: &str,
        rate: Decimal,
        threshold: Decimal,
    ) -> Vec<Opportunity> {
        let (forward_buy, forward_sell, reverse_buy, reverse_sell) = tokio::join!(
            self.leg(asset, fiat_a, Side::Buy),
            self.leg(asset, fiat_b, Side::Sell),
            self.leg(asset, fiat_b, Side::Buy),
            self.leg(asset, fiat_a, Side::Sell),
        );

        let mut opportunities = Vec::new();

        if let (Some(buy), Some(sell)) = (forward_buy, forward_sell) {
            // Forward: buy in fiat A, sell in fiat B; cost converted A -> B
            let converted_cost = buy.price * rate;
            if let Some(opportunity) =
                Self::evaluate(asset, Direction::Forward, buy, sell, converted_cost, threshold)
            {
                opportunities.push(opportunity);
            }
        }

        if let (Some(buy), Some(sell)) = (reverse_buy, reverse_sell) {
            // Reverse: buy in fiat B, sell in fiat A; cost converted B -> A
            let converted_cost = buy.price / rate;
            if let Some(opportunity) =
                Self::evaluate(asset, Direction::Reverse, buy, sell, converted_cost, threshold)
            {
                opportunities.push(opportunity);
            }
        }

        opportunities
    }

    fn evaluate(
        asset: &str,
        direction: Direction,
        buy: Quote,
        sell: Quote,
        converted_cost: Decimal,
        threshold: Decimal,
    ) -> Option<Opportunity> {
        let profit_percent =
            round_percent((sell.price - converted_cost) / converted_cost * Decimal::ONE_HUNDRED);

        if profit_percent < threshold {
            return None;
        }

        Some(Opportunity {
            asset: asset.to_string(),
            direction,
            buy_price: buy.price,
            sell_price: sell.price,
            profit_percent,
            buy_quote: buy,
            sell_quote: sell,
            timestamp: get_timestamp_millis(),
        })
    }

    /// One quote leg. Source failures and unusable quotes degrade to absent;
    /// the scan carries on with the remaining legs.
    async fn leg(&self, asset: &str, fiat: &str, side: Side) -> Option<Quote> {
        match self.source.quote(asset, fiat, side).await {
            Ok(quote) if quote.price > Decimal::ZERO => Some(quote),
            Ok(_) => {
                tracing::warn!(
                    asset,
                    fiat,
                    side = side.as_str(),
                    "discarding quote with non-positive price"
                );
                None
            }
            Err(error) => {
                tracing::warn!(
                    asset,
                    fiat,
                    side = side.as_str(),
                    %error,
                    "quote unavailable"
                );
                None
            }
        }
    }
}
