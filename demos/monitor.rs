/**
 * Relay Monitor Example
 *
 * This example demonstrates the full client session against a real relay
 * module: automatic periodic status display, plus a one-off toggle whose
 * result shows up through the follow-up refresh.
 */
use relayctl::{ConsoleSink, Device, Monitor};
use std::sync::Arc;
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() {
    env_logger::init();
    println!("--- Relayctl - Monitor ---");

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://192.168.1.5".to_string());

    // 1. Point at the relay module; polling starts immediately
    println!("[INFO] Monitoring {base_url}");
    let device = Device::new(&base_url);
    let monitor = Monitor::new(device, Arc::new(ConsoleSink));

    // 2. Give the startup refresh a moment, then flip the relay once
    sleep(Duration::from_secs(1)).await;
    println!("[STEP] Toggling relay...");
    monitor.toggle().await;

    // 3. Keep showing periodic updates for a while
    sleep(Duration::from_secs(30)).await;
    monitor.stop();
    println!("[INFO] Done.");
}
