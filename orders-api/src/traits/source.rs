//! Defines the `OrderSource` trait for order retrieval.
//!
//! This module specifies the contract that every order provider must implement.
//! It lets the service abstract over where orders come from (an in-memory list,
//! a file on disk, a test fixture) while always receiving the full, unfiltered
//! set of current orders.

use crate::model::order::Order;

/// A trait for components that supply the current orders.
///
/// # Examples
///
/// ```
/// use orders::traits::source::OrderSource;
/// use orders::model::order::Order;
///
/// struct FixedSource;
///
/// impl OrderSource for FixedSource {
///     fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
///         Ok(vec![Order::new("AAPL", 150.0, 20)])
///     }
/// }
///
/// assert_eq!(FixedSource.get_orders().unwrap().len(), 1);
/// ```
pub trait OrderSource {
    /// Returns the current full set of orders.
    ///
    /// No filtering, pagination or ordering is promised by the source. Each
    /// call may observe a different snapshot.
    ///
    /// # Returns
    ///
    /// * `anyhow::Result<Vec<Order>>` - The orders, or whatever failure the
    ///   source raised.
    fn get_orders(&self) -> anyhow::Result<Vec<Order>>;
}

impl<'a> OrderSource for Box<dyn OrderSource + 'a> {
    fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
        (**self).get_orders()
    }
}

impl<S: OrderSource + ?Sized> OrderSource for &S {
    fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
        (**self).get_orders()
    }
}
