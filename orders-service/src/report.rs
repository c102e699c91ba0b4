//! Wires a configured source and sink into the service and runs the
//! requested reports.

use crate::service::OrdersService;
use crate::settings::ReportConfig;
use crate::sink::{CsvFileSink, LogSink};
use crate::source::JsonFileSource;
use clap::ValueEnum;
use log::info;
use orders::{OrderSink, OrderSource};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Small,
    Large,
    Both,
}

impl ReportKind {
    fn includes(&self, other: ReportKind) -> bool {
        *self == ReportKind::Both || *self == other
    }
}

/// Runs the requested report(s) through `service`.
pub fn run<S: OrderSource, W: OrderSink>(
    service: &OrdersService<S, W>,
    kind: ReportKind,
) -> anyhow::Result<()> {
    if kind.includes(ReportKind::Small) {
        service.write_out_small_orders()?;
    }
    if kind.includes(ReportKind::Large) {
        service.write_out_large_orders()?;
    }
    Ok(())
}

/// Path for one report's CSV. When both reports go to files they get a
/// `_small` / `_large` suffix so the second does not overwrite the first.
pub fn output_path(base: &Path, requested: ReportKind, report: ReportKind) -> PathBuf {
    if requested != ReportKind::Both {
        return base.to_path_buf();
    }

    let suffix = match report {
        ReportKind::Small => "small",
        ReportKind::Large => "large",
        ReportKind::Both => return base.to_path_buf(),
    };
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };
    base.with_file_name(name)
}

/// Builds the collaborators described by `config` and runs `kind`.
pub fn execute(config: &ReportConfig, kind: ReportKind) -> anyhow::Result<()> {
    let input = config
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("No input file configured (use --input or ORDERS_INPUT)"))?;
    let source = JsonFileSource::new(input);
    info!("Reading orders from {}", source.path().display());

    for report in [ReportKind::Small, ReportKind::Large] {
        if !kind.includes(report) {
            continue;
        }

        match &config.output {
            Some(base) => {
                let sink = CsvFileSink::new(output_path(base, kind, report));
                let service = OrdersService::builder()
                    .source(&source)
                    .sink(sink)
                    .thresholds(config.thresholds)
                    .build()?;
                run(&service, report)?;
                info!("Wrote {:?} orders to {}", report, service.sink().path().display());
            }
            None => {
                let label = format!("{:?}", report).to_lowercase();
                let service = OrdersService::builder()
                    .source(&source)
                    .sink(LogSink::new(label))
                    .thresholds(config.thresholds)
                    .build()?;
                run(&service, report)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::source::InMemorySource;
    use orders::Order;

    #[test]
    fn test_both_runs_small_then_large() {
        let service = OrdersService::new(
            InMemorySource::new(vec![Order::new("S", 2.0, 50), Order::new("L", 1.0, 500)]),
            RecordingSink::new(),
        );

        run(&service, ReportKind::Both).unwrap();

        assert_eq!(
            service.sink().writes(),
            vec![
                vec![Order::new("L", 1.0, 500), Order::new("S", 2.0, 50)],
                vec![Order::new("L", 1.0, 500)],
            ]
        );
    }

    #[test]
    fn test_single_kind_runs_once() {
        let service = OrdersService::new(InMemorySource::default(), RecordingSink::new());

        run(&service, ReportKind::Large).unwrap();

        assert_eq!(service.sink().calls(), 1);
    }

    #[test]
    fn test_output_path_suffixes_only_for_both() {
        let base = Path::new("/tmp/out/report.csv");
        assert_eq!(output_path(base, ReportKind::Small, ReportKind::Small), base);
        assert_eq!(
            output_path(base, ReportKind::Both, ReportKind::Small),
            PathBuf::from("/tmp/out/report_small.csv")
        );
        assert_eq!(
            output_path(Path::new("report"), ReportKind::Both, ReportKind::Large),
            PathBuf::from("report_large")
        );
    }

    #[test]
    fn test_execute_requires_input() {
        let err = execute(&ReportConfig::default(), ReportKind::Both).unwrap_err();
        assert!(err.to_string().contains("No input file"));
    }
}
