use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shipex")]
#[command(about = "Export terminal-filtered shipment event JSONs to one CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Container name. Falls back to the `container` key in shipex.toml,
    /// then to the production default.
    #[arg(long)]
    pub container: Option<String>,

    /// Path prefix in the container (if any)
    #[arg(long, default_value = "")]
    pub root: String,

    /// Inclusive start date, e.g. 2025-8-1 or 2025-08-01
    #[arg(long)]
    pub start_date: String,

    /// Inclusive end date
    #[arg(long)]
    pub end_date: String,

    /// Terminal code to filter on. Falls back to the `terminal` key in
    /// shipex.toml, then to 010-CLT.
    #[arg(long)]
    pub terminal: Option<String>,

    /// Output CSV path. Defaults to shipments_<terminal>_<start>_to_<end>.csv
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Max PRO folders per date, 0 = unlimited
    #[arg(long, default_value = "20")]
    pub pro_limit: usize,

    /// Max JSON files per PRO folder, 0 = unlimited
    #[arg(long, default_value = "10")]
    pub files_limit: usize,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Config file path (default: ./shipex.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read from a local directory instead of Azure (tests, offline runs)
    #[arg(long)]
    pub local_root: Option<PathBuf>,
}
