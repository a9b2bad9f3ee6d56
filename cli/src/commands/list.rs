//! List command - print one snapshot of active ports.

use anyhow::Result;
use portwatch_core::StatusSource;

use crate::display;
use crate::settings::Settings;

pub async fn run(settings: &Settings) -> Result<()> {
    let source = StatusSource::for_kind(settings.source);
    let records = source.fetch().await?;

    display::print_snapshot(&records, None)?;
    Ok(())
}
