//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with one external tool.

pub mod command;
pub mod resolver;
pub mod status;

// Re-export main types for convenience
pub use command::CommandSpec;
pub use resolver::TasklistResolver;
pub use status::{
    parse_lsof_output, parse_netstat_output, LsofSource, NetstatSource, SourceKind, StatusSource,
};
