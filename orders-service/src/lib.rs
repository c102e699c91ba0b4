pub mod error;
pub mod filter;
pub mod report;
pub mod service;
pub mod settings;
pub mod sink;
pub mod source;

pub use error::ServiceError;
pub use filter::SizeFilter;
pub use service::{OrdersService, OrdersServiceBuilder};
pub use settings::{ReportConfig, Thresholds};
