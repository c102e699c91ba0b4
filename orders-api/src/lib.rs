pub mod model;
pub mod traits;

pub use model::order::Order;
pub use traits::sink::OrderSink;
pub use traits::source::OrderSource;
