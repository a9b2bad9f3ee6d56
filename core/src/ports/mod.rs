//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces the rest of the crate uses to talk
//! to external systems. Implementations live in `adapters`.

mod resolver;
mod status_source;

pub use resolver::ProcessNameResolver;
pub use status_source::StatusSourcePort;
