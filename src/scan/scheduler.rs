//! Periodic, non-overlapping scan cycle driver.
//!
//! The orchestrator only exposes a single-cycle entry point; this scheduler
//! owns the cadence. A new cycle starts only after the previous one's
//! results are published to the shared slot the HTTP layer reads.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::models::SignalResult;
use crate::scan::orchestrator::ScanOrchestrator;

pub struct ScanScheduler {
    orchestrator: Arc<ScanOrchestrator>,
    results: Arc<RwLock<Vec<SignalResult>>>,
    interval_seconds: u64,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    pub fn new(
        orchestrator: Arc<ScanOrchestrator>,
        results: Arc<RwLock<Vec<SignalResult>>>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("scheduler disabled: interval_seconds is 0".into());
        }
        Ok(Self {
            orchestrator,
            results,
            interval_seconds,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scan loop. The first cycle runs immediately.
    pub async fn start(&self) {
        let orchestrator = self.orchestrator.clone();
        let results = self.results.clone();
        let interval_seconds = self.interval_seconds;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval_seconds));
            // A cycle that overruns its tick delays the next one instead of
            // racing it.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let cycle = orchestrator.run_cycle().await;
                *results.write().await = cycle;
            }
        });

        {
            let mut slot = self.handle.write().await;
            *slot = Some(handle);
        }

        info!(interval = self.interval_seconds, "scan scheduler started");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(handle) = handle.take() {
            handle.abort();
            info!("scan scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
