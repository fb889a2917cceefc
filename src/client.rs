//! HTTP communication with a single relay module.
//! Wraps the device's two fixed endpoints: a status read and a toggle write.

use crate::error::{RelayError, Result};
use crate::state::DeviceState;
use log::debug;

/// Fixed path of the status endpoint on the device.
pub const STATUS_PATH: &str = "/status.json";
/// Fixed path of the toggle endpoint on the device.
pub const TOGGLE_PATH: &str = "/toggle";

/// Handle to one relay module's HTTP control surface.
///
/// Construction performs no I/O; each request is a one-shot call owned by its
/// call site. There is no authentication, no retry, and no request timeout.
#[derive(Debug, Clone)]
pub struct Device {
    base_url: String,
    http: reqwest::Client,
}

impl Device {
    /// Create a handle for the module reachable at `base_url`
    /// (e.g. `http://192.168.1.5`). A trailing slash is tolerated.
    pub fn new<U: Into<String>>(base_url: U) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this handle points at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the device's current state from the status endpoint.
    ///
    /// A non-success HTTP code or a payload missing either field is an error;
    /// the device remains the single source of truth, so nothing is cached on
    /// failure.
    pub async fn status(&self) -> Result<DeviceState> {
        let url = format!("{}{}", self.base_url, STATUS_PATH);
        debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let code = resp.status();
        if !code.is_success() {
            return Err(RelayError::Status(code.as_u16()));
        }

        let body = resp.bytes().await?;
        let state: DeviceState = serde_json::from_slice(&body)?;
        debug!(
            "Device {} reports relay={} ip={}",
            self.base_url, state.relay_status, state.network_address
        );
        Ok(state)
    }

    /// Sends the toggle command that flips the relay's position.
    ///
    /// The request carries no body and the response is not inspected; only
    /// completion matters. Callers learn the resulting relay position from the
    /// next status read, never from this call.
    pub async fn toggle(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, TOGGLE_PATH);
        debug!("POST {}", url);

        self.http.post(&url).send().await?;
        Ok(())
    }
}
