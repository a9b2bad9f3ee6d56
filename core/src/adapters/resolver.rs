//! Process name resolution using `tasklist`.

use tracing::debug;

use crate::domain::UNKNOWN_PROCESS;
use crate::ports::ProcessNameResolver;

use super::command::CommandSpec;

/// Index of the data row in `tasklist` table output.
///
/// A header line, a rule and a blank line come before it.
const DATA_LINE: usize = 3;

/// Resolves process names one PID at a time with `tasklist /FI "PID eq <pid>"`.
#[derive(Debug, Clone)]
pub struct TasklistResolver {
    command: CommandSpec,
}

impl TasklistResolver {
    /// Create a resolver that runs the system `tasklist`.
    pub fn new() -> Self {
        Self::with_command(CommandSpec::new("tasklist", Vec::<String>::new()))
    }

    /// Create a resolver around a custom listing command.
    ///
    /// The PID filter arguments are appended to `command` on every call.
    pub fn with_command(command: CommandSpec) -> Self {
        Self { command }
    }

    /// Pull the process name out of `tasklist` table output.
    ///
    /// Returns [`UNKNOWN_PROCESS`] if the data row is missing or blank.
    pub fn extract_process_name(output: &str) -> String {
        output
            .split('\n')
            .nth(DATA_LINE)
            .and_then(|line| line.split_whitespace().next())
            .unwrap_or(UNKNOWN_PROCESS)
            .to_string()
    }
}

impl Default for TasklistResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessNameResolver for TasklistResolver {
    async fn resolve(&self, pid: &str) -> String {
        let filter = format!("PID eq {}", pid);
        match self.command.with_args(["/FI", filter.as_str()]).run().await {
            Ok(output) => Self::extract_process_name(&output),
            Err(e) => {
                debug!(pid, error = %e, "process name lookup failed");
                UNKNOWN_PROCESS.to_string()
            }
        }
    }
}
