//! Process name resolver port (interface).

/// Port for mapping a PID to a process name.
///
/// Resolution never fails: implementations return
/// [`UNKNOWN_PROCESS`](crate::domain::UNKNOWN_PROCESS) when the name
/// cannot be determined.
pub trait ProcessNameResolver: Send + Sync {
    /// Resolve the name of the process with the given PID.
    fn resolve(&self, pid: &str) -> impl std::future::Future<Output = String> + Send;
}
