//! # Relayctl
//!
//! Asynchronous HTTP client for local monitoring and control of networked
//! relay switch modules, such as ESP8266-based relay boards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relayctl::{ConsoleSink, Device, Monitor};
//! use std::sync::Arc;
//!
//! # async fn run() {
//! let device = Device::new("http://192.168.1.5");
//! let monitor = Monitor::new(device, Arc::new(ConsoleSink));
//! monitor.toggle().await; // flip the relay, display refreshes on its own
//! # }
//! ```
//!
pub mod client;
pub mod display;
pub mod error;
pub mod monitor;
pub mod state;

pub use client::Device;
pub use display::{ConsoleSink, StatusSink};
pub use error::RelayError;
pub use monitor::Monitor;
pub use state::DeviceState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
