use anyhow::Result;
use clap::Parser;
use log::info;
use orders_service::{report, ReportConfig};

mod args;

use args::Args;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // 1. File and environment settings
    let mut config = ReportConfig::load(args.config.as_deref())?;

    // 2. Command line overrides
    if let Some(input) = args.input {
        config.input = Some(input);
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }

    info!(
        "Running {:?} report(s) with thresholds small > {}, large > {}",
        args.report, config.thresholds.small, config.thresholds.large
    );

    // 3. Run
    report::execute(&config, args.report)
}
