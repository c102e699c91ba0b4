use clap::Parser;
use orders_service::report::ReportKind;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Writes small and large orders sorted by price", long_about = None)]
pub struct Args {
    /// Settings file (TOML, JSON or YAML). ORDERS_* environment variables
    /// override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of orders
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// CSV file to write. Orders are logged when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Which report to produce
    #[arg(long, value_enum, default_value_t = ReportKind::Both)]
    pub report: ReportKind,
}
