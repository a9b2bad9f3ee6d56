//! Domain layer - Pure data models.
//!
//! These types have no I/O dependencies and can be tested in isolation.

mod port;

pub use port::{PortRecord, NOT_APPLICABLE, UNKNOWN_PROCESS, WILDCARD};
