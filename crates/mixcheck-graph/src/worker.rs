//! Background worker that keeps the graph current

use crate::{GraphHandle, RefreshMetrics};
use mixcheck_domain::traits::SubstanceSource;
use std::fmt::Display;
use std::sync::Arc;
use tokio::time::{interval_at, Duration, Instant};

/// Background worker that reloads a source on a schedule
///
/// Every tick the worker loads the source and hands the result to the
/// [`GraphHandle`]. A failed load or a rejected feed is logged and counted;
/// the graph in service stays as it was. The first reload happens one full
/// interval after the worker starts.
///
/// # Examples
///
/// ```no_run
/// use mixcheck_graph::{GraphConfig, GraphHandle, RefreshWorker};
/// use mixcheck_domain::Substance;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() {
///     let handle = Arc::new(GraphHandle::new(GraphConfig::default()));
///     let source: Vec<Substance> = Vec::new();
///     let mut worker = RefreshWorker::new(source, handle, Duration::from_secs(3600));
///
///     // Run indefinitely (until Ctrl+C)
///     worker.run().await;
/// }
/// ```
pub struct RefreshWorker<S> {
    source: S,
    handle: Arc<GraphHandle>,
    interval: Duration,
    metrics: RefreshMetrics,
}

impl<S> RefreshWorker<S>
where
    S: SubstanceSource,
    S::Error: Display,
{
    /// Create a worker reloading `source` into `handle` every `interval`
    pub fn new(source: S, handle: Arc<GraphHandle>, interval: Duration) -> Self {
        Self {
            source,
            handle,
            interval,
            metrics: RefreshMetrics::new(),
        }
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    pub async fn run(&mut self) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);

        tracing::info!("Refresh worker started (interval: {:?})", self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh_once();
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Shutdown signal received, stopping refresh worker");
                    break;
                }
            }
        }

        tracing::info!(
            "Refresh worker stopped: {} attempts, {} successes, {} failures",
            self.metrics.attempts,
            self.metrics.successes,
            self.metrics.failures
        );
    }

    /// Run for a specific number of cycles
    pub async fn run_cycles(&mut self, cycles: usize) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);

        tracing::info!(
            "Refresh worker started for {} cycles (interval: {:?})",
            cycles,
            self.interval
        );

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("Starting refresh cycle {}/{}", cycle + 1, cycles);
            self.refresh_once();
        }
    }

    fn refresh_once(&mut self) {
        match self.handle.reload_from(&self.source) {
            Ok(stats) => {
                tracing::info!(
                    "Refresh completed: {} substances, {} links",
                    stats.substances,
                    stats.total_links()
                );
                self.metrics.record_success();
            }
            Err(e) => {
                tracing::warn!("Refresh failed, previous graph kept: {}", e);
                self.metrics.record_failure(e.to_string());
            }
        }
    }

    /// Outcomes of the refreshes run so far
    pub fn metrics(&self) -> &RefreshMetrics {
        &self.metrics
    }

    /// Reset the refresh counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}
