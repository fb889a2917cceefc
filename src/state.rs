//! Last-observed device state as reported by the relay module.

use serde::Deserialize;

/// A single status report from the device.
///
/// The client never constructs or mutates one of these: every value is the
/// verbatim payload of the most recent successful status read, displayed once
/// and then dropped. The relay label is opaque to the client and is shown
/// exactly as the device reported it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceState {
    /// Relay position label (e.g. "ON"/"OFF", but any string the device sends).
    #[serde(rename = "relay")]
    pub relay_status: String,

    /// The device's own network address as it reports it.
    #[serde(rename = "ip")]
    pub network_address: String,
}
