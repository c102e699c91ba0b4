use orders::Order;
use std::cmp::Ordering;

/// Keeps orders whose size is strictly greater than a threshold.
///
/// Both report kinds share this one predicate; only the threshold differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFilter {
    threshold: i64,
}

impl SizeFilter {
    /// Orders with `size > 10`.
    pub const SMALL: SizeFilter = SizeFilter::new(10);
    /// Orders with `size > 100`.
    pub const LARGE: SizeFilter = SizeFilter::new(100);

    pub const fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn matches(&self, order: &Order) -> bool {
        order.size() > self.threshold
    }

    /// Returns the matching orders sorted ascending by price.
    ///
    /// The sort is stable, so orders with equal prices keep the relative
    /// order they had in `orders`. A NaN price sorts before every other
    /// price, and `0.0` and `-0.0` compare equal.
    pub fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        let mut kept: Vec<Order> = orders.into_iter().filter(|o| self.matches(o)).collect();
        kept.sort_by(|a, b| compare_prices(a.price(), b.price()));
        kept
    }
}

fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()))
}
