use super::*;
use crate::sink::RecordingSink;
use crate::source::InMemorySource;
use orders::Order;
use std::cell::Cell;
use std::fmt;

fn create_test_service(orders: Vec<Order>) -> OrdersService<InMemorySource, RecordingSink> {
    OrdersService::new(InMemorySource::new(orders), RecordingSink::new())
}

fn written(service: &OrdersService<InMemorySource, RecordingSink>) -> Vec<Order> {
    assert_eq!(service.sink().calls(), 1, "sink must be called exactly once");
    service.sink().last().unwrap()
}

#[derive(Debug)]
struct StoreDown;

impl fmt::Display for StoreDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order store unavailable")
    }
}

impl std::error::Error for StoreDown {}

struct FailingSource;
impl OrderSource for FailingSource {
    fn get_orders(&self) -> anyhow::Result<Vec<Order>> {
        Err(StoreDown.into())
    }
}

struct FailingSink {
    calls: Cell<usize>,
}
impl OrderSink for FailingSink {
    fn write_orders(&self, _: &[Order]) -> anyhow::Result<()> {
        self.calls.set(self.calls.get() + 1);
        Err(anyhow::anyhow!("display detached"))
    }
}

#[test]
fn test_small_orders_none_match_writes_empty() {
    let service = create_test_service(vec![Order::sized(8), Order::sized(9), Order::sized(10)]);

    service.write_out_small_orders().unwrap();

    assert!(written(&service).is_empty());
}

#[test]
fn test_small_orders_written_by_price() {
    let service = create_test_service(vec![
        Order::sized(10),
        Order::new("12", 12.0, 12),
        Order::new("11", 11.0, 11),
    ]);

    service.write_out_small_orders().unwrap();

    assert_eq!(
        written(&service),
        vec![Order::new("11", 11.0, 11), Order::new("12", 12.0, 12)]
    );
}

#[test]
fn test_large_orders_none_match_writes_empty() {
    let service = create_test_service(vec![
        Order::sized(98),
        Order::sized(99),
        Order::sized(100),
    ]);

    service.write_out_large_orders().unwrap();

    assert!(written(&service).is_empty());
}

#[test]
fn test_large_orders_written_by_price() {
    let service = create_test_service(vec![
        Order::sized(100),
        Order::new("102", 102.0, 102),
        Order::new("101", 101.0, 101),
    ]);

    service.write_out_large_orders().unwrap();

    assert_eq!(
        written(&service),
        vec![Order::new("101", 101.0, 101), Order::new("102", 102.0, 102)]
    );
}

#[test]
fn test_empty_source_still_calls_sink() {
    let service = create_test_service(Vec::new());

    service.write_out_small_orders().unwrap();
    service.write_out_large_orders().unwrap();

    assert_eq!(service.sink().writes(), vec![Vec::<Order>::new(), Vec::new()]);
}

#[test]
fn test_each_call_reads_a_fresh_snapshot() {
    let mut source = InMemorySource::new(vec![Order::new("A", 3.0, 20)]);
    let sink = RecordingSink::new();

    OrdersService::new(&source, &sink).write_out_small_orders().unwrap();
    source.set_orders(vec![Order::new("B", 1.0, 30), Order::sized(2)]);
    OrdersService::new(&source, &sink).write_out_small_orders().unwrap();

    assert_eq!(
        sink.writes(),
        vec![vec![Order::new("A", 3.0, 20)], vec![Order::new("B", 1.0, 30)]]
    );
}

#[test]
fn test_source_is_not_mutated() {
    let orders = vec![
        Order::new("Z", 9.0, 50),
        Order::sized(1),
        Order::new("Y", 2.0, 40),
    ];
    let service = create_test_service(orders.clone());

    service.write_out_small_orders().unwrap();

    assert_eq!(service.source().orders(), orders.as_slice());
}

#[test]
fn test_custom_thresholds() {
    let service = create_test_service(vec![Order::sized(5), Order::new("X", 1.0, 6)])
        .with_thresholds(Thresholds { small: 5, large: 0 });

    service.write_out_small_orders().unwrap();
    assert_eq!(service.sink().last().unwrap(), vec![Order::new("X", 1.0, 6)]);

    service.write_out_large_orders().unwrap();
    assert_eq!(service.sink().last().unwrap().len(), 2);
}

#[test]
fn test_source_error_propagates_unchanged() {
    let sink = RecordingSink::new();
    let service = OrdersService::new(FailingSource, &sink);

    let err = service.write_out_large_orders().unwrap_err();

    assert!(err.downcast_ref::<StoreDown>().is_some());
    assert_eq!(err.to_string(), "order store unavailable");
    assert_eq!(sink.calls(), 0, "sink must not be called when the source fails");
}

#[test]
fn test_sink_error_propagates_unchanged() {
    let sink = FailingSink {
        calls: Cell::new(0),
    };
    let service = OrdersService::new(InMemorySource::new(vec![Order::sized(11)]), &sink);

    let err = service.write_out_small_orders().unwrap_err();

    assert_eq!(err.to_string(), "display detached");
    assert_eq!(sink.calls.get(), 1);
}

#[test]
fn test_builder_requires_source() {
    let result = OrdersService::<InMemorySource, RecordingSink>::builder()
        .sink(RecordingSink::new())
        .build();

    assert_eq!(result.err(), Some(ServiceError::InvalidArgument("source")));
}

#[test]
fn test_builder_requires_sink() {
    let result = OrdersService::<InMemorySource, RecordingSink>::builder()
        .source(InMemorySource::default())
        .build();

    assert_eq!(result.err(), Some(ServiceError::InvalidArgument("sink")));
}

#[test]
fn test_builder_applies_thresholds() {
    let service = OrdersService::builder()
        .source(InMemorySource::new(vec![Order::sized(3)]))
        .sink(RecordingSink::new())
        .thresholds(Thresholds { small: 2, large: 100 })
        .build()
        .unwrap();

    service.write_out_small_orders().unwrap();

    assert_eq!(written(&service), vec![Order::sized(3)]);
}
