//! Status source port (interface).

use crate::domain::PortRecord;
use crate::error::Result;

/// Port for collecting one snapshot of the host's sockets.
///
/// Implementations run a platform status tool (netstat, lsof, ...) and
/// parse its output. Only a failure to run the tool is an error; lines
/// that cannot be parsed are dropped from the result.
pub trait StatusSourcePort: Send + Sync {
    /// Collect all sockets, in the order the tool printed them.
    fn fetch(&self) -> impl std::future::Future<Output = Result<Vec<PortRecord>>> + Send;
}
