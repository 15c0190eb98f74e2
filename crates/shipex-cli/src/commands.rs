use crate::args::Cli;
use crate::config::Config;
use crate::logging::init_logging;
use anyhow::{Context, Result, anyhow};
use shipex_core::{CollectOptions, DateRange, collect_events, parse_date_dir, write_csv};
use shipex_store::{AzureStore, LocalStore, StoreClient, StoreConfig};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_CONTAINER: &str = "shipmentsestesprod02";
pub const DEFAULT_TERMINAL: &str = "010-CLT";

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_from(Path::new("shipex.toml"))?,
    };

    let terminal = cli
        .terminal
        .or(config.terminal)
        .unwrap_or_else(|| DEFAULT_TERMINAL.to_string());
    let container = cli
        .container
        .or(config.container)
        .unwrap_or_else(|| DEFAULT_CONTAINER.to_string());

    // Range validation happens before any store construction or I/O.
    let start = parse_cli_date(&cli.start_date)?;
    let end = parse_cli_date(&cli.end_date)?;
    let range = DateRange::new(start, end)?;

    let options = CollectOptions {
        root: cli.root.clone(),
        range,
        terminal: terminal.clone(),
        entity_cap: cli.pro_limit,
        file_cap: cli.files_limit,
    };

    let store: Box<dyn StoreClient> = match &cli.local_root {
        Some(local_root) => {
            info!(root = %local_root.display(), "Using local store");
            Box::new(LocalStore::new(local_root))
        }
        None => {
            let store_config = StoreConfig::from_env(&container);
            Box::new(AzureStore::connect(&store_config)?)
        }
    };

    let records = collect_events(store.as_ref(), &options)?;

    let out = cli
        .out
        .unwrap_or_else(|| default_out_path(&terminal, &cli.start_date, &cli.end_date));

    if records.is_empty() {
        warn!(path = %out.display(), "No matching records found, writing an empty CSV");
    }
    write_csv(&out, &records)?;
    info!(rows = records.len(), path = %out.display(), "Wrote CSV");

    println!("{}", out.display());
    Ok(())
}

fn parse_cli_date(raw: &str) -> Result<chrono::NaiveDate> {
    parse_date_dir(raw.trim())
        .ok_or_else(|| anyhow!("Invalid date '{}': expected YYYY-M-D, e.g. 2025-8-1", raw))
}

fn default_out_path(terminal: &str, start: &str, end: &str) -> PathBuf {
    let safe_terminal = terminal.replace('/', "-");
    PathBuf::from(format!(
        "shipments_{}_{}_to_{}.csv",
        safe_terminal, start, end
    ))
}
