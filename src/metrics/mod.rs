//! Prometheus metrics for the scan loop and the HTTP surface.

use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub scan_cycles_total: IntCounter,
    pub fetch_failures_total: IntCounter,
    pub confirmed_signals_total: IntCounter,
    pub alerts_sent_total: IntCounter,
    pub scan_cycle_duration_seconds: Histogram,
    pub valid_symbols_last_cycle: IntGauge,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scan_cycles_total =
            IntCounter::new("scan_cycles_total", "Completed scan cycles")?;
        let fetch_failures_total = IntCounter::new(
            "fetch_failures_total",
            "Candle fetches that exhausted their retry budget",
        )?;
        let confirmed_signals_total = IntCounter::new(
            "confirmed_signals_total",
            "ConfirmedLong/ConfirmedShort classifications",
        )?;
        let alerts_sent_total =
            IntCounter::new("alerts_sent_total", "Alert deliveries attempted")?;
        let scan_cycle_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "scan_cycle_duration_seconds",
            "Wall-clock duration of a full scan cycle",
        ))?;
        let valid_symbols_last_cycle = IntGauge::new(
            "valid_symbols_last_cycle",
            "Symbols with a valid result in the latest cycle",
        )?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration",
        ))?;

        registry.register(Box::new(scan_cycles_total.clone()))?;
        registry.register(Box::new(fetch_failures_total.clone()))?;
        registry.register(Box::new(confirmed_signals_total.clone()))?;
        registry.register(Box::new(alerts_sent_total.clone()))?;
        registry.register(Box::new(scan_cycle_duration_seconds.clone()))?;
        registry.register(Box::new(valid_symbols_last_cycle.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            scan_cycles_total,
            fetch_failures_total,
            confirmed_signals_total,
            alerts_sent_total,
            scan_cycle_duration_seconds,
            valid_symbols_last_cycle,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
