//! Column-based status source using `netstat -ano`.

use tracing::debug;

use crate::domain::PortRecord;
use crate::error::Result;
use crate::ports::{ProcessNameResolver, StatusSourcePort};

use crate::adapters::command::CommandSpec;
use crate::adapters::resolver::TasklistResolver;

/// Minimum column count of a TCP row: proto, local, remote, state, PID.
const TCP_MIN_FIELDS: usize = 5;

/// Minimum column count of a UDP row: proto, local, `*:*`, PID.
const UDP_MIN_FIELDS: usize = 4;

/// Status source that parses `netstat -ano` and resolves each PID separately.
pub struct NetstatSource<R = TasklistResolver> {
    command: CommandSpec,
    resolver: R,
}

impl NetstatSource {
    /// Create a source that runs the system `netstat` and `tasklist`.
    pub fn new() -> Self {
        Self::with_parts(
            CommandSpec::new("netstat", ["-ano"]),
            TasklistResolver::new(),
        )
    }
}

impl Default for NetstatSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessNameResolver> NetstatSource<R> {
    /// Create a source from a custom status command and resolver.
    pub fn with_parts(command: CommandSpec, resolver: R) -> Self {
        Self { command, resolver }
    }
}

impl<R: ProcessNameResolver> StatusSourcePort for NetstatSource<R> {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        let output = self.command.run().await?;
        Ok(parse_netstat_output(&output, &self.resolver).await)
    }
}

/// Parse `netstat -ano` output into port records.
///
/// Expected format:
/// ```text
/// Active Connections
///
///   Proto  Local Address          Foreign Address        State           PID
///   TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1020
///   TCP    [::1]:6379             [::]:0                 LISTENING       8080
///   UDP    0.0.0.0:5353           *:*                                    2244
/// ```
///
/// Lines not starting with `TCP` or `UDP`, and rows with too few columns,
/// are skipped. The resolver is awaited once per kept row, in line order,
/// with no caching between rows that share a PID.
pub async fn parse_netstat_output<R: ProcessNameResolver>(
    output: &str,
    resolver: &R,
) -> Vec<PortRecord> {
    let mut records = Vec::new();

    for line in output.lines() {
        let line = line.trim();

        if line.starts_with("TCP") {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < TCP_MIN_FIELDS {
                continue;
            }

            let process_name = resolver.resolve(fields[4]).await;
            records.push(PortRecord::new(
                fields[0],
                fields[1],
                fields[2],
                fields[3],
                fields[4],
                process_name,
            ));
        } else if line.starts_with("UDP") {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < UDP_MIN_FIELDS {
                continue;
            }

            // fields[2] is the foreign address placeholder, unused for UDP
            let process_name = resolver.resolve(fields[3]).await;
            records.push(PortRecord::connectionless(
                fields[0],
                fields[1],
                fields[3],
                process_name,
            ));
        }
    }

    debug!(records = records.len(), "parsed netstat output");
    records
}
