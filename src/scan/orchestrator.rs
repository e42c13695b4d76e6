//! Per-symbol fetch/compute/classify pipeline and cycle aggregation.
//!
//! Symbols are independent: each pipeline runs concurrently with no shared
//! mutable state, and one symbol's failure never aborts the cycle for the
//! others. All fetch-layer failures are absorbed here; the indicator engine
//! and classifier only ever see complete, valid series.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::indicators::{self, IndicatorError};
use crate::metrics::Metrics;
use crate::models::SignalResult;
use crate::services::alerts::{alert_text, TelegramAlerter};
use crate::services::market_data::CandleSource;
use crate::signals;

pub struct ScanOrchestrator {
    config: Arc<Config>,
    source: Arc<dyn CandleSource>,
    alerter: Option<Arc<TelegramAlerter>>,
    metrics: Option<Arc<Metrics>>,
}

impl ScanOrchestrator {
    pub fn new(config: Arc<Config>, source: Arc<dyn CandleSource>) -> Self {
        Self {
            config,
            source,
            alerter: None,
            metrics: None,
        }
    }

    pub fn with_alerter(mut self, alerter: Arc<TelegramAlerter>) -> Self {
        self.alerter = Some(alerter);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one full pass over the symbol universe.
    ///
    /// Output keeps the configured symbol order so the presentation table
    /// stays stable across cycles. Insufficient-data symbols appear as
    /// explicit Waiting rows, never as coerced numeric output.
    pub async fn run_cycle(&self) -> Vec<SignalResult> {
        let started = Instant::now();

        let unordered: Vec<SignalResult> = stream::iter(self.config.symbols.clone())
            .map(|symbol| async move { self.scan_symbol(symbol).await })
            .buffer_unordered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut by_symbol: HashMap<String, SignalResult> = unordered
            .into_iter()
            .map(|result| (result.symbol.clone(), result))
            .collect();
        let results: Vec<SignalResult> = self
            .config
            .symbols
            .iter()
            .filter_map(|symbol| by_symbol.remove(symbol))
            .collect();

        let valid = results.iter().filter(|r| r.valid).count();
        if valid == 0 && !results.is_empty() {
            warn!(
                symbols = results.len(),
                "no symbol produced a valid result this cycle, endpoint may be unavailable"
            );
        }

        if let Some(metrics) = &self.metrics {
            metrics.scan_cycles_total.inc();
            metrics
                .scan_cycle_duration_seconds
                .observe(started.elapsed().as_secs_f64());
            metrics.valid_symbols_last_cycle.set(valid as i64);
        }

        info!(
            symbols = results.len(),
            valid,
            duration_ms = started.elapsed().as_millis() as u64,
            "scan cycle complete"
        );
        results
    }

    async fn scan_symbol(&self, symbol: String) -> SignalResult {
        let pair = self.config.pair(&symbol);
        let limit = self.config.candle_limit;

        // Short and long timeframes are independent reads.
        let (short, long) = tokio::join!(
            self.source
                .fetch_candles(&pair, self.config.short_timeframe, limit),
            self.source
                .fetch_candles(&pair, self.config.long_timeframe, limit),
        );

        let (short, long) = match (short, long) {
            (Ok(short), Ok(long)) => (short, long),
            (short, long) => {
                for err in [short.err(), long.err()].into_iter().flatten() {
                    warn!(symbol = %symbol, error = %err, "candle fetch failed, symbol marked waiting");
                }
                if let Some(metrics) = &self.metrics {
                    metrics.fetch_failures_total.inc();
                }
                return SignalResult::waiting(symbol);
            }
        };

        let snapshot = match indicators::compute_snapshot(&short) {
            Ok(snapshot) => snapshot,
            Err(IndicatorError::InsufficientData { required, actual }) => {
                debug!(symbol = %symbol, required, actual, "insufficient short-timeframe data");
                return SignalResult::waiting(symbol);
            }
        };

        let Some(long_trend) = signals::trend_from_series(&long) else {
            debug!(symbol = %symbol, "insufficient long-timeframe data");
            return SignalResult::waiting(symbol);
        };

        let classification = signals::classify(&snapshot, long_trend, &self.config.offsets);

        // Live price annotation is best-effort; the last close is already a
        // valid price for the row.
        let price = match self.source.latest_price(&pair).await {
            Ok(price) => price,
            Err(err) => {
                debug!(symbol = %symbol, error = %err, "live price unavailable, using last close");
                snapshot.close
            }
        };

        let chart = indicators::chart_series(&short, classification.take_profit);
        let result = SignalResult::from_classification(
            symbol,
            price,
            snapshot,
            classification,
            long_trend,
            Some(chart),
        );

        if result.label.is_confirmed() {
            if let Some(metrics) = &self.metrics {
                metrics.confirmed_signals_total.inc();
            }
            if let Some(alerter) = &self.alerter {
                alerter.send(&alert_text(&result)).await;
                if let Some(metrics) = &self.metrics {
                    metrics.alerts_sent_total.inc();
                }
            }
        }

        result
    }
}
