//! Plain-text table rendering.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{Local, NaiveTime};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use portwatch_core::PortRecord;

/// Width of the rule under the header row.
const RULE_WIDTH: usize = 90;

/// Render the header, rule and one row per record.
pub fn render_table(records: &[PortRecord]) -> String {
    let mut out = format_row(
        "Proto",
        "Local Address",
        "Remote Address",
        "State",
        "PID",
        "Process",
    );
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for record in records {
        out.push_str(&format_row(
            &record.protocol,
            &record.local_address,
            &record.remote_address,
            &record.state,
            &record.pid,
            &record.process_name,
        ));
    }

    out
}

/// Summary line shown under the table.
pub fn render_footer(count: usize, updated: NaiveTime, interval: Option<Duration>) -> String {
    let noun = if count == 1 { "socket" } else { "sockets" };
    let mut footer = format!(
        "Total: {} {} | Updated {}",
        count,
        noun,
        updated.format("%H:%M:%S")
    );
    if let Some(interval) = interval {
        footer.push_str(&format!(" | Refreshing every {}s", interval.as_secs()));
    }
    footer
}

/// Write the table and footer to stdout.
pub fn print_snapshot(records: &[PortRecord], interval: Option<Duration>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_table(records))?;
    writeln!(
        stdout,
        "\n{}",
        render_footer(records.len(), Local::now().time(), interval)
    )?;
    stdout.flush()
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

fn format_row(
    protocol: &str,
    local: &str,
    remote: &str,
    state: &str,
    pid: &str,
    process: &str,
) -> String {
    format!(
        "{:<6} {:<22} {:<22} {:<12} {:<6} {}\n",
        protocol, local, remote, state, pid, process
    )
}
