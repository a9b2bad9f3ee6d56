//! Port record domain model.

/// Marker for an endpoint that does not apply (e.g. the remote side of a listener).
pub const WILDCARD: &str = "*";

/// Marker for a state that does not apply (e.g. connectionless UDP sockets).
pub const NOT_APPLICABLE: &str = "N/A";

/// Process name used when the owning process cannot be resolved.
pub const UNKNOWN_PROCESS: &str = "Unknown";

/// One socket and the process that owns it.
///
/// Every field is populated. Missing values are represented by the
/// sentinels [`WILDCARD`], [`NOT_APPLICABLE`] and [`UNKNOWN_PROCESS`],
/// never by an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRecord {
    /// Transport protocol token as printed by the tool (e.g. "TCP", "UDP").
    pub protocol: String,
    /// Local endpoint in `address:port` form.
    pub local_address: String,
    /// Remote endpoint, or [`WILDCARD`].
    pub remote_address: String,
    /// Connection state, or [`NOT_APPLICABLE`].
    pub state: String,
    /// Process ID exactly as the tool rendered it.
    pub pid: String,
    /// Owning process name, or [`UNKNOWN_PROCESS`].
    pub process_name: String,
}

impl PortRecord {
    /// Create a record, substituting sentinels for any empty field.
    pub fn new(
        protocol: impl Into<String>,
        local_address: impl Into<String>,
        remote_address: impl Into<String>,
        state: impl Into<String>,
        pid: impl Into<String>,
        process_name: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            local_address: or_sentinel(local_address.into(), WILDCARD),
            remote_address: or_sentinel(remote_address.into(), WILDCARD),
            state: or_sentinel(state.into(), NOT_APPLICABLE),
            pid: pid.into(),
            process_name: or_sentinel(process_name.into(), UNKNOWN_PROCESS),
        }
    }

    /// Create a record for a connectionless socket.
    ///
    /// The remote address is always [`WILDCARD`] and the state is always
    /// [`NOT_APPLICABLE`].
    pub fn connectionless(
        protocol: impl Into<String>,
        local_address: impl Into<String>,
        pid: impl Into<String>,
        process_name: impl Into<String>,
    ) -> Self {
        Self::new(
            protocol,
            local_address,
            WILDCARD,
            NOT_APPLICABLE,
            pid,
            process_name,
        )
    }
}

impl std::fmt::Display for PortRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}] (PID: {}, Process: {})",
            self.protocol,
            self.local_address,
            self.remote_address,
            self.state,
            self.pid,
            self.process_name
        )
    }
}

fn or_sentinel(value: String, sentinel: &str) -> String {
    if value.is_empty() {
        sentinel.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let record = PortRecord::new(
            "TCP",
            "127.0.0.1:80",
            "0.0.0.0:0",
            "LISTENING",
            "1234",
            "proc1234.exe",
        );
        assert_eq!(record.protocol, "TCP");
        assert_eq!(record.local_address, "127.0.0.1:80");
        assert_eq!(record.remote_address, "0.0.0.0:0");
        assert_eq!(record.state, "LISTENING");
        assert_eq!(record.pid, "1234");
        assert_eq!(record.process_name, "proc1234.exe");
    }

    #[test]
    fn test_connectionless() {
        let record = PortRecord::connectionless("UDP", "127.0.0.1:53", "5678", "dns.exe");
        assert_eq!(record.remote_address, WILDCARD);
        assert_eq!(record.state, NOT_APPLICABLE);
    }

    #[test]
    fn test_empty_fields_become_sentinels() {
        let record = PortRecord::new("TCP", "", "", "", "1", "");
        assert_eq!(record.local_address, "*");
        assert_eq!(record.remote_address, "*");
        assert_eq!(record.state, "N/A");
        assert_eq!(record.process_name, "Unknown");
    }

    #[test]
    fn test_display() {
        let record = PortRecord::connectionless("UDP", "*:5353", "88", "mDNSResponder");
        assert_eq!(
            record.to_string(),
            "UDP *:5353 -> * [N/A] (PID: 88, Process: mDNSResponder)"
        );
    }
}
