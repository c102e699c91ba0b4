use orders::{Order, OrderSink};
use std::cell::RefCell;

/// Keeps every sequence it receives, in call order.
///
/// Useful to check what a service wrote and how many times the sink was hit.
#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: RefCell<Vec<Vec<Order>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write_orders` calls so far.
    pub fn calls(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn writes(&self) -> Vec<Vec<Order>> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<Vec<Order>> {
        self.writes.borrow().last().cloned()
    }
}

impl OrderSink for RecordingSink {
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        self.writes.borrow_mut().push(orders.to_vec());
        Ok(())
    }
}
