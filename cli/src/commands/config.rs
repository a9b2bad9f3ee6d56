//! Config command - show the effective settings.

use portwatch_core::ConfigStore;

use crate::settings::Settings;

pub fn show(store: &ConfigStore, settings: &Settings) {
    let path = store.path();
    let status = if path.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };

    println!("Config file:      {}{}", path.display(), status);
    println!("Refresh interval: {}s", settings.interval.as_secs());
    println!("Source:           {}", settings.source);
}
