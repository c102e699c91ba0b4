use orders::{Order, OrderSource};

pub mod json;

pub use json::JsonFileSource;

/// Serves a fixed list of orders held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    orders: Vec<Order>,
}

impl InMemorySource {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl OrderSource for InMemorySource {
    fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}
