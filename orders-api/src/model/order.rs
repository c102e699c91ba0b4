//! The trade order record passed between sources, the service and sinks.

use serde::{Deserialize, Serialize};

/// A single trade order.
///
/// No invariants are enforced: an empty symbol, a zero or negative price and
/// a zero or negative size are all accepted and carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    symbol: String,
    price: f64,
    size: i64,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The instrument identifier, may be empty.
    /// * `price` - The order price.
    /// * `size` - The order quantity.
    pub fn new(symbol: impl Into<String>, price: f64, size: i64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            size,
        }
    }

    /// An order carrying only a size, every other field left unset.
    pub fn sized(size: i64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn size(&self) -> i64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_leaves_other_fields_unset() {
        let order = Order::sized(42);
        assert_eq!(order.symbol(), "");
        assert_eq!(order.price(), 0.0);
        assert_eq!(order.size(), 42);
    }

    #[test]
    fn test_missing_json_fields_default() {
        let order: Order = serde_json::from_str(r#"{"size": 11}"#).unwrap();
        assert_eq!(order, Order::sized(11));

        let order: Order =
            serde_json::from_str(r#"{"symbol": "AAPL", "price": 150.5, "size": -3}"#).unwrap();
        assert_eq!(order, Order::new("AAPL", 150.5, -3));
    }
}
