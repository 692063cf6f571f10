use async_trait::async_trait;
use p2p_spread_scanner_rs::{PriceSource, Quote, Side, SpreadScannerError};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type TripleKey = (String, String, Side);

/// In-memory price source backed by a quote table.
///
/// Each (asset, fiat, side) triple holds a queue of quotes: successive calls
/// consume them in order, and the last quote is then repeated. This lets a
/// test give the reference-rate fetch a different price than the per-asset
/// leg for the same triple. Triples registered as failing simulate a
/// timed-out or malformed price-source call.
pub struct MockSource {
    quotes: Mutex<HashMap<TripleKey, VecDeque<Quote>>>,
    failures: HashSet<TripleKey>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockSource {
    pub fn new() -> Self {
        Self {
            quotes: Mutex::new(HashMap::new()),
            failures: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_quote(mut self, asset: &str, fiat: &str, side: Side, price: Decimal) -> Self {
        let quote = Quote {
            price,
            adv_no: format!("{}-{}-{}", asset, fiat, side.as_str()),
            trade_methods: vec!["M-PESA".to_string()],
        };
        self.quotes
            .get_mut()
            .unwrap()
            .entry((asset.to_string(), fiat.to_string(), side))
            .or_default()
            .push_back(quote);
        self
    }

    pub fn with_failing(mut self, asset: &str, fiat: &str, side: Side) -> Self {
        self.failures
            .insert((asset.to_string(), fiat.to_string(), side));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for MockSource {
    async fn quote(
        &self,
        asset: &str,
        fiat: &str,
        side: Side,
    ) -> Result<Quote, SpreadScannerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = (asset.to_string(), fiat.to_string(), side);
        if self.failures.contains(&key) {
            return Err(SpreadScannerError::ApiError(
                "simulated timeout".to_string(),
            ));
        }

        let mut quotes = self.quotes.lock().unwrap();
        let unavailable = || {
            SpreadScannerError::QuoteUnavailable(format!("{}/{} {}", asset, fiat, side.as_str()))
        };
        let queue = quotes.get_mut(&key).ok_or_else(unavailable)?;

        if queue.len() > 1 {
            Ok(queue.pop_front().unwrap())
        } else {
            queue.front().cloned().ok_or_else(unavailable)
        }
    }
}
