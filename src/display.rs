//! Presentation seam: two display slots the host environment renders.

/// Prefix for the relay position slot, matching the device's stock web UI.
const STATE_LINE_PREFIX: &str = "current state: ";

/// Formats the text for the relay position slot.
///
/// The label itself is passed through untransformed.
pub fn state_line(relay_status: &str) -> String {
    format!("{STATE_LINE_PREFIX}{relay_status}")
}

/// Destination for the two strings the client displays.
///
/// Implementations own all rendering; the monitor only pushes text. Each call
/// unconditionally overwrites the slot's previous content, including with
/// stale data if two refreshes complete out of order (last writer wins).
pub trait StatusSink: Send + Sync {
    /// Display `"current state: <relay>"` in the state slot.
    fn set_state_line(&self, line: &str);

    /// Display the device's raw network address in the address slot.
    fn set_address(&self, addr: &str);
}

/// Sink that writes both slots to stdout, one line each.
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn set_state_line(&self, line: &str) {
        println!("{line}");
    }

    fn set_address(&self, addr: &str) {
        println!("{addr}");
    }
}
