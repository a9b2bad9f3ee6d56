//! PortWatch CLI - live view of active network ports
//!
//! Periodically lists the host's sockets with the platform status tool
//! and prints them, with their owning processes, as a refreshed table.

mod commands;
mod display;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portwatch_core::{ConfigStore, SourceKind};
use tracing_subscriber::EnvFilter;

use settings::Settings;

#[derive(Parser)]
#[command(name = "portwatch")]
#[command(author, version, about = "Live view of active network ports and their processes")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seconds between refreshes
    #[arg(short, long, global = true)]
    interval: Option<u64>,

    /// Status source to read (netstat or lsof)
    #[arg(short, long, global = true)]
    source: Option<SourceKind>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one snapshot of active ports and exit
    #[command(alias = "ls")]
    List,

    /// Show the effective configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = match cli.config {
        Some(path) => ConfigStore::with_path(path),
        None => ConfigStore::new()?,
    };
    let config = store.load().await?;
    let settings = Settings::resolve(&config, cli.interval, cli.source)?;

    match cli.command {
        Some(Commands::List) => commands::list::run(&settings).await?,
        Some(Commands::Config) => commands::config::show(&store, &settings),
        None => commands::watch::run(&settings).await?,
    }

    Ok(())
}

/// Log to stderr so output never interleaves with the table.
///
/// Level comes from `RUST_LOG`, defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["portwatch", "--interval", "2", "--source", "netstat", "ls"]);
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.interval, Some(2));
        assert_eq!(cli.source, Some(SourceKind::Netstat));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["portwatch", "list", "-s", "lsof"]);
        assert_eq!(cli.source, Some(SourceKind::Lsof));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["portwatch", "--source", "ss"]).is_err());
    }

    #[test]
    fn test_no_subcommand_means_watch() {
        let cli = Cli::parse_from(["portwatch"]);
        assert!(cli.command.is_none());
    }
}
