use crate::scanner::{Opportunity, SpreadScanner};
use crate::source::PriceSource;
use rust_decimal::Decimal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs [`SpreadScanner::scan`] on a timer and sends each batch over the
/// returned channel. Replaces the ad-hoc poll-and-sleep loop callers would
/// otherwise write around `scan`.
///
/// The spawned task owns the scanner and stops when the receiver is dropped.
/// A failed scan (e.g. the reference rate is momentarily unavailable) is
/// logged and retried on the next tick; it never ends the stream.
pub fn stream_opportunities<S>(
    scanner: SpreadScanner<S>,
    assets: Vec<String>,
    fiat_a: String,
    fiat_b: String,
    threshold: Decimal,
    interval: Duration,
) -> mpsc::Receiver<Vec<Opportunity>>
where
    S: PriceSource + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            let asset_refs: Vec<&str> = assets.iter().map(String::as_str).collect();
            match scanner.scan(&asset_refs, &fiat_a, &fiat_b, threshold).await {
                Ok(batch) => {
                    if tx.send(batch).await.is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "scan failed; retrying on next tick");
                }
            }
        }
    });

    rx
}
