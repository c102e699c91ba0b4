use crate::error::{Result, ServiceError};
use crate::filter::SizeFilter;
use crate::settings::Thresholds;
use log::debug;
use orders::{OrderSink, OrderSource};

/// Reads orders from a source and writes the small or large ones, sorted by
/// price, to a sink.
///
/// Holds no state between calls: every operation works on the snapshot the
/// source returns at call time.
pub struct OrdersService<S, W> {
    source: S,
    sink: W,
    small: SizeFilter,
    large: SizeFilter,
}

impl<S: OrderSource, W: OrderSink> OrdersService<S, W> {
    pub fn new(source: S, sink: W) -> Self {
        Self {
            source,
            sink,
            small: SizeFilter::SMALL,
            large: SizeFilter::LARGE,
        }
    }

    pub fn builder() -> OrdersServiceBuilder<S, W> {
        OrdersServiceBuilder::default()
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.small = SizeFilter::new(thresholds.small);
        self.large = SizeFilter::new(thresholds.large);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Writes every order with `size > 10` (or the configured small
    /// threshold), ascending by price. The sink is called even when nothing
    /// matches.
    pub fn write_out_small_orders(&self) -> anyhow::Result<()> {
        self.write_out(self.small)
    }

    /// Same as [`Self::write_out_small_orders`] with `size > 100`.
    pub fn write_out_large_orders(&self) -> anyhow::Result<()> {
        self.write_out(self.large)
    }

    fn write_out(&self, filter: SizeFilter) -> anyhow::Result<()> {
        let orders = self.source.get_orders()?;
        let read = orders.len();

        let kept = filter.apply(orders);
        debug!(
            "Kept {} of {} orders with size > {}",
            kept.len(),
            read,
            filter.threshold()
        );

        self.sink.write_orders(&kept)
    }
}

/// Assembles an [`OrdersService`] and refuses to build one with a missing
/// collaborator.
pub struct OrdersServiceBuilder<S, W> {
    source: Option<S>,
    sink: Option<W>,
    thresholds: Thresholds,
}

impl<S, W> Default for OrdersServiceBuilder<S, W> {
    fn default() -> Self {
        Self {
            source: None,
            sink: None,
            thresholds: Thresholds::default(),
        }
    }
}

impl<S: OrderSource, W: OrderSink> OrdersServiceBuilder<S, W> {
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn sink(mut self, sink: W) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn build(self) -> Result<OrdersService<S, W>> {
        let source = self.source.ok_or(ServiceError::InvalidArgument("source"))?;
        let sink = self.sink.ok_or(ServiceError::InvalidArgument("sink"))?;
        Ok(OrdersService::new(source, sink).with_thresholds(self.thresholds))
    }
}

#[cfg(test)]
mod tests;
