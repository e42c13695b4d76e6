//! Pulsescan Scanner
//!
//! Runs the periodic scan loop and serves the latest cycle over HTTP.

use dotenvy::dotenv;
use pulsescan::config::Config;
use pulsescan::http::{create_router, AppState, HealthStatus};
use pulsescan::logging;
use pulsescan::metrics::Metrics;
use pulsescan::models::SignalResult;
use pulsescan::scan::{ScanOrchestrator, ScanScheduler};
use pulsescan::services::market_data::CandleSource;
use pulsescan::services::{BinanceCandleSource, TelegramAlerter};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Arc::new(Config::from_env());
    let env = pulsescan::config::get_environment();
    info!("Starting Pulsescan Scanner");
    info!(environment = %env, "Environment");
    info!(
        symbols = ?config.symbols,
        short_timeframe = %config.short_timeframe,
        long_timeframe = %config.long_timeframe,
        interval = config.scan_interval_seconds,
        "Scan configuration"
    );

    let metrics = Arc::new(Metrics::new()?);

    let source: Arc<dyn CandleSource> = Arc::new(
        BinanceCandleSource::with_client(
            &config.binance_base_url,
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()?,
        )
        .map_err(|e| format!("market data source: {e}"))?,
    );

    let mut orchestrator =
        ScanOrchestrator::new(config.clone(), source).with_metrics(metrics.clone());
    if let Some(telegram) = &config.telegram {
        match TelegramAlerter::new(&telegram.bot_token, &telegram.chat_id) {
            Ok(alerter) => {
                info!("Telegram alerts enabled");
                orchestrator = orchestrator.with_alerter(Arc::new(alerter));
            }
            Err(e) => {
                warn!(error = %e, "Telegram alerter misconfigured, alerts disabled");
            }
        }
    }
    let orchestrator = Arc::new(orchestrator);

    let results: Arc<RwLock<Vec<SignalResult>>> = Arc::new(RwLock::new(Vec::new()));
    let scheduler = ScanScheduler::new(
        orchestrator,
        results.clone(),
        config.scan_interval_seconds,
    )
    .map_err(|e| format!("scheduler: {e}"))?;
    scheduler.start().await;

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        results,
    };
    let app = create_router(state);
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    info!(port = config.http_port, "HTTP server listening on port {}", config.http_port);

    tokio::select! {
        served = axum::serve(listener, app).into_future() => {
            served?;
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down scanner...");
            scheduler.stop().await;
            info!("Scanner stopped");
        }
    }

    Ok(())
}
