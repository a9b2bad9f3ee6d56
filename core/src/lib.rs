//! PortWatch Core Library
//!
//! Collects a host's active network sockets and the processes that own
//! them by parsing the output of platform status tools:
//! - Windows: `netstat -ano`, with `tasklist` for process names
//! - Linux and macOS: `lsof -nP -i`
//!
//! Parsing is deliberately lossy: lines that don't fit the expected
//! layout are dropped, and only a failure to run the status tool is
//! reported as an error.
//!
//! # Architecture
//! - `domain`: The port record and its sentinel values
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: Command runner, parsers, resolver and source selection
//! - `config`: Optional JSON settings

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{PortRecord, NOT_APPLICABLE, UNKNOWN_PROCESS, WILDCARD};

// Re-export other commonly used types
pub use adapters::{
    parse_lsof_output, parse_netstat_output, CommandSpec, LsofSource, NetstatSource, SourceKind,
    StatusSource, TasklistResolver,
};
pub use config::{Config, ConfigStore, DEFAULT_REFRESH_INTERVAL};
pub use error::{Error, Result};
pub use ports::{ProcessNameResolver, StatusSourcePort};
