//! Subscribers registering through the bus and being removed as a unit.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use eventvisor::{
    BusConfig, Event, EventBus, FailurePolicy, Order, Registrar, Subscribe, SubscriberId,
};

struct PlotCreated(u32);
impl Event for PlotCreated {}

struct PlotDisposed(u32);
impl Event for PlotDisposed {}

/// Keeps a running plot count.
struct PlotCounter {
    name: &'static str,
    count: AtomicU32,
}

impl PlotCounter {
    fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            count: AtomicU32::new(0),
        })
    }
}

impl Subscribe for PlotCounter {
    fn id(&self) -> SubscriberId {
        SubscriberId::new(self.name)
    }

    fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>) {
        let on_created = Arc::clone(&self);
        let on_disposed = Arc::clone(&self);
        registrar
            .on(Order::Normal, "created", move |_: &PlotCreated| {
                on_created.count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .on_default("disposed", move |ev: &PlotDisposed| {
                if ev.0 == 0 {
                    return Err("plot 0 cannot be disposed".into());
                }
                on_disposed.count.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            });
    }
}

#[test]
fn test_subscriber_handlers_are_owned_and_removable() {
    let counter = PlotCounter::new("counter");
    let bus = EventBus::builder(BusConfig::default())
        .with_subscriber(counter.clone())
        .build();

    assert_eq!(bus.handlers::<PlotCreated>(), 1);
    assert_eq!(bus.handlers::<PlotDisposed>(), 1);

    bus.post(&PlotCreated(1)).unwrap();
    bus.post(&PlotCreated(2)).unwrap();
    bus.post(&PlotDisposed(1)).unwrap();
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);

    assert_eq!(bus.unregister_subscriber(&SubscriberId::new("counter")), 2);
    assert!(bus.is_empty());
    bus.post(&PlotCreated(3)).unwrap();
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_same_id_registers_once() {
    let bus = EventBus::default();
    assert_eq!(bus.register_subscriber(PlotCounter::new("dup")), 2);
    assert_eq!(bus.register_subscriber(PlotCounter::new("dup")), 0);
    assert_eq!(bus.register_subscriber(PlotCounter::new("other")), 2);
    assert_eq!(bus.len(), 4);
}

#[test]
fn test_default_order_comes_from_config() {
    let bus = EventBus::new(BusConfig::default().with_default_order(Order::Monitor));
    bus.register_subscriber(PlotCounter::new("c"));
    let list = bus.snapshot::<PlotDisposed>().unwrap();
    assert_eq!(list.iter().next().map(|r| r.priority()), Some(Order::Monitor));
}

#[test]
fn test_failing_subscriber_handler_follows_policy() {
    let lenient = EventBus::builder(BusConfig::default())
        .with_subscribers(vec![PlotCounter::new("c") as Arc<dyn Subscribe>])
        .build();
    let delivery = lenient.post(&PlotDisposed(0)).unwrap();
    assert_eq!(delivery.failures.len(), 1);
    assert_eq!(delivery.failures[0].handler(), "disposed");

    let strict = EventBus::builder(BusConfig::default().with_failure_policy(FailurePolicy::Stop))
        .with_subscribers(vec![PlotCounter::new("c") as Arc<dyn Subscribe>])
        .build();
    let err = strict.post(&PlotDisposed(0)).unwrap_err();
    assert_eq!(err.as_label(), "bus_dispatch_aborted");
    assert_eq!(err.invocation().cause().to_string(), "plot 0 cannot be disposed");
}
