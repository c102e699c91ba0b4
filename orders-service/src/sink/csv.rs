use crate::error::SinkError;
use orders::{Order, OrderSink};
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["symbol", "price", "size"];

/// Writes each received sequence to a CSV file, replacing previous content.
///
/// Format: `symbol,price,size` with a header row, written even when the
/// sequence is empty.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, orders: &[Order]) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(HEADER)?;
        for order in orders {
            writer.serialize(order)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl OrderSink for CsvFileSink {
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        self.write(orders).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
