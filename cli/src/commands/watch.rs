//! Watch loop - refresh the port table on a fixed interval.

use anyhow::Result;
use portwatch_core::StatusSource;
use tracing::{error, info};

use crate::display;
use crate::settings::Settings;

/// Fetch, clear, print, sleep. Runs until the process is interrupted.
///
/// A failed fetch is logged and retried after the usual delay; the
/// previous table stays on screen in the meantime.
pub async fn run(settings: &Settings) -> Result<()> {
    let source = StatusSource::for_kind(settings.source);
    let interactive = atty::is(atty::Stream::Stdout);

    info!(
        source = %source.kind(),
        interval_secs = settings.interval.as_secs(),
        "watching ports"
    );

    loop {
        match source.fetch().await {
            Ok(records) => {
                if interactive {
                    display::clear_screen()?;
                }
                display::print_snapshot(&records, Some(settings.interval))?;
            }
            Err(e) => error!("Error: {}", e),
        }

        tokio::time::sleep(settings.interval).await;
    }
}
