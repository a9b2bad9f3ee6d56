//! Status source adapters.
//!
//! Platform-specific ways of listing sockets, behind one tagged choice
//! made at startup.

mod lsof;
mod netstat;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::PortRecord;
use crate::error::{Error, Result};
use crate::ports::StatusSourcePort;

pub use lsof::{parse_lsof_output, LsofSource};
pub use netstat::{parse_netstat_output, NetstatSource};

/// Which status tool to read sockets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `netstat -ano` with per-PID `tasklist` lookups (Windows).
    Netstat,
    /// `lsof -nP -i` (Linux, macOS).
    Lsof,
}

impl SourceKind {
    /// All available source kinds.
    pub const ALL: [SourceKind; 2] = [SourceKind::Netstat, SourceKind::Lsof];

    /// Pick the source kind for the host OS.
    pub fn detect() -> Result<Self> {
        if cfg!(target_os = "windows") {
            Ok(SourceKind::Netstat)
        } else if cfg!(any(target_os = "linux", target_os = "macos")) {
            Ok(SourceKind::Lsof)
        } else {
            Err(Error::UnsupportedPlatform(std::env::consts::OS.to_string()))
        }
    }

    /// Name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Netstat => "netstat",
            SourceKind::Lsof => "lsof",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Config(format!(
                    "Unknown source '{}', expected one of: netstat, lsof",
                    s
                ))
            })
    }
}

/// The status source selected for this run.
///
/// Chosen once at startup so nothing downstream branches on the platform.
pub enum StatusSource {
    Netstat(NetstatSource),
    Lsof(LsofSource),
}

impl StatusSource {
    /// Build the default source for the given kind.
    pub fn for_kind(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Netstat => StatusSource::Netstat(NetstatSource::new()),
            SourceKind::Lsof => StatusSource::Lsof(LsofSource::new()),
        }
    }

    /// The kind of this source.
    pub fn kind(&self) -> SourceKind {
        match self {
            StatusSource::Netstat(_) => SourceKind::Netstat,
            StatusSource::Lsof(_) => SourceKind::Lsof,
        }
    }

    /// Collect one snapshot of sockets.
    pub async fn fetch(&self) -> Result<Vec<PortRecord>> {
        match self {
            StatusSource::Netstat(source) => source.fetch().await,
            StatusSource::Lsof(source) => source.fetch().await,
        }
    }
}

impl StatusSourcePort for StatusSource {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        StatusSource::fetch(self).await
    }
}
