//! Compound-field status source using `lsof -nP -i`.

use tracing::debug;

use crate::adapters::command::CommandSpec;
use crate::domain::{PortRecord, NOT_APPLICABLE, WILDCARD};
use crate::error::Result;
use crate::ports::StatusSourcePort;

/// COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
const MIN_FIELDS: usize = 9;

/// Status source that parses `lsof` socket listings.
///
/// lsof reports the owning command itself, so no resolver is involved.
pub struct LsofSource {
    command: CommandSpec,
}

impl LsofSource {
    /// Create a source that runs the system `lsof`.
    ///
    /// Flags:
    /// - -n: Show IP addresses (don't resolve to hostnames)
    /// - -P: Show port numbers (don't resolve to service names)
    /// - -i: List IP sockets only
    pub fn new() -> Self {
        Self::with_command(CommandSpec::new("lsof", ["-nP", "-i"]))
    }

    /// Create a source around a custom status command.
    pub fn with_command(command: CommandSpec) -> Self {
        Self { command }
    }
}

impl Default for LsofSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSourcePort for LsofSource {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        let output = self.command.run().await?;
        Ok(parse_lsof_output(&output))
    }
}

/// Parse `lsof -nP -i` output into port records.
///
/// Expected format:
/// ```text
/// COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
/// node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
/// curl      4242  code    5u  IPv4 0x1234567890abcdef      0t0  TCP 10.0.0.2:50544->93.184.216.34:443 (ESTABLISHED)
/// ```
///
/// The first line is always treated as the header. Rows with fewer than
/// nine columns are skipped. Everything from the NAME column on is joined
/// back into one field and split into endpoints and state.
pub fn parse_lsof_output(output: &str) -> Vec<PortRecord> {
    let mut records = Vec::new();

    for line in output.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let name_field = fields[8..].join(" ");
        let (local, remote) = split_endpoints(&name_field);
        let state = extract_state(&name_field);

        records.push(PortRecord::new(
            fields[7], local, remote, state, fields[1], fields[0],
        ));
    }

    debug!(records = records.len(), "parsed lsof output");
    records
}

/// Split a NAME field on `->` into (local, remote).
///
/// Without an arrow the socket has no peer and remote is [`WILDCARD`].
fn split_endpoints(name_field: &str) -> (&str, &str) {
    let mut parts = name_field.split("->");
    let local = parts.next().unwrap_or_default().trim();
    let remote = match parts.next() {
        Some(rest) => rest.split(' ').next().unwrap_or_default(),
        None => WILDCARD,
    };
    (local, remote)
}

/// Text after the last `(`, minus one trailing `)`, or [`NOT_APPLICABLE`].
fn extract_state(name_field: &str) -> &str {
    match name_field.rfind('(') {
        Some(idx) => {
            let rest = &name_field[idx + 1..];
            rest.strip_suffix(')').unwrap_or(rest)
        }
        None => NOT_APPLICABLE,
    }
}
