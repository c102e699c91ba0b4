use log::info;
use orders::{Order, OrderSink};

pub mod csv;
pub mod recording;

pub use csv::CsvFileSink;
pub use recording::RecordingSink;

/// Writes orders through the `log` facade at info level.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    label: String,
}

impl LogSink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl OrderSink for LogSink {
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        if orders.is_empty() {
            info!("[{}] no orders", self.label);
            return Ok(());
        }

        for order in orders {
            info!(
                "[{}] {:<8} price={:.4} size={}",
                self.label,
                order.symbol(),
                order.price(),
                order.size()
            );
        }
        info!("[{}] {} orders written", self.label, orders.len());
        Ok(())
    }
}
