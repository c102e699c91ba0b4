use crate::model::order::Order;

pub trait OrderSink {
    /// Called with a finished sequence of orders to output.
    ///
    /// The sequence is already filtered and sorted; the sink must not assume
    /// it is non-empty.
    ///
    /// # Arguments
    ///
    /// * `orders` - The orders to write, in output order.
    ///
    /// # Returns
    ///
    /// * `anyhow::Result<()>` - The failure contract is owned by the sink.
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()>;
}

impl<'a> OrderSink for Box<dyn OrderSink + 'a> {
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        (**self).write_orders(orders)
    }
}

impl<S: OrderSink + ?Sized> OrderSink for &S {
    fn write_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        (**self).write_orders(orders)
    }
}
