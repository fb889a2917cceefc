//! Client session for one relay module: periodic status polling plus the
//! on-demand toggle-then-refresh flow.

use crate::client::Device;
use crate::display::{self, StatusSink};
use log::{debug, info};
use std::sync::Arc;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Default period between scheduled status reads.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

struct MonitorInner {
    device: Device,
    sink: Arc<dyn StatusSink>,
    poll_interval: Duration,
}

/// Keeps a display in sync with one relay module.
///
/// Construction spawns a background task that refreshes the display once
/// immediately and then at a fixed interval for the life of the session.
/// [`toggle`](Self::toggle) flips the relay and refreshes once more as soon
/// as the command resolves.
///
/// There is no coordination between the periodic refresh and a post-toggle
/// refresh: if two reads are in flight at once, whichever response arrives
/// last is what the display ends up showing.
#[derive(Clone)]
pub struct Monitor {
    inner: Arc<MonitorInner>,
    cancel_token: CancellationToken,
}

impl Monitor {
    /// Start a session with the default five-second poll interval.
    pub fn new(device: Device, sink: Arc<dyn StatusSink>) -> Self {
        Self::with_interval(device, sink, DEFAULT_POLL_INTERVAL)
    }

    /// Start a session polling at a custom interval.
    pub fn with_interval(device: Device, sink: Arc<dyn StatusSink>, poll_interval: Duration) -> Self {
        let monitor = Self {
            inner: Arc::new(MonitorInner {
                device,
                sink,
                poll_interval,
            }),
            cancel_token: CancellationToken::new(),
        };

        let m = monitor.clone();
        tokio::spawn(async move { m.run_poll_task().await });
        monitor
    }

    /// Fetches the device's current state and pushes it to the display.
    ///
    /// On any failure the call is inert: nothing is retried or surfaced, the
    /// display keeps its previous content, and the next scheduled tick issues
    /// a fresh independent read. Callers use completion only.
    pub async fn refresh(&self) {
        match self.inner.device.status().await {
            Ok(state) => {
                self.inner
                    .sink
                    .set_state_line(&display::state_line(&state.relay_status));
                self.inner.sink.set_address(&state.network_address);
            }
            Err(e) => {
                debug!(
                    "Status read from {} failed, display unchanged: {}",
                    self.inner.device.base_url(),
                    e
                );
            }
        }
    }

    /// Sends the toggle command, then refreshes the display exactly once.
    ///
    /// The toggle's own outcome is deliberately ignored; a failed toggle still
    /// triggers the refresh, which simply shows the unchanged state.
    pub async fn toggle(&self) {
        if let Err(e) = self.inner.device.toggle().await {
            debug!("Toggle on {} failed: {}", self.inner.device.base_url(), e);
        }
        self.refresh().await;
    }

    /// Stops the periodic polling task.
    ///
    /// The normal lifecycle never calls this; the session runs until its
    /// execution context ends. The handle exists so an embedding application
    /// can tear the session down explicitly.
    pub fn stop(&self) {
        info!("Stopping monitor for {}", self.inner.device.base_url());
        self.cancel_token.cancel();
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    async fn run_poll_task(self) {
        // First tick completes immediately, giving the on-load refresh.
        let mut ticker = interval(self.inner.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        debug!(
            "Starting poll task for {} (interval: {:?})",
            self.inner.device.base_url(),
            self.inner.poll_interval
        );

        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => break,
                _ = ticker.tick() => {
                    // Each tick gets its own task so a stalled read never
                    // delays the schedule.
                    let m = self.clone();
                    tokio::spawn(async move { m.refresh().await });
                }
            }
        }

        debug!("Poll task for {} stopped", self.inner.device.base_url());
    }
}
