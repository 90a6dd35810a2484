//! Registrations and the bus shared across runtime worker threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use eventvisor::{Callback, Dispatch, Event, EventBus, HandlerRegistration, Order};

struct Tick;
impl Event for Tick {}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_registration_dispatches_from_many_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let reg = Arc::new(HandlerRegistration::new(
        Order::Normal,
        None,
        Callback::new("tick", move |_: &Tick| {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }),
    ));

    let mut joins = Vec::new();
    for _ in 0..8 {
        let reg = Arc::clone(&reg);
        joins.push(tokio::spawn(async move {
            for _ in 0..100 {
                assert_eq!(reg.handle_event(&Tick).unwrap(), Dispatch::Invoked);
            }
        }));
    }
    for j in joins {
        j.await.unwrap();
    }
    assert_eq!(hits.load(Ordering::Relaxed), 800);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_bus_posts_while_handlers_register() {
    let bus = Arc::new(EventBus::default());
    let hits = Arc::new(AtomicUsize::new(0));

    let mut joins = Vec::new();
    for i in 0..4 {
        let bus = Arc::clone(&bus);
        let hits = Arc::clone(&hits);
        joins.push(tokio::spawn(async move {
            let key = format!("h{i}");
            bus.register(HandlerRegistration::new(
                Order::Normal,
                None,
                Callback::new(key, move |_: &Tick| {
                    hits.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                }),
            ));
            for _ in 0..50 {
                bus.post(&Tick).unwrap();
            }
        }));
    }
    for j in joins {
        j.await.unwrap();
    }

    assert_eq!(bus.handlers::<Tick>(), 4);
    let before = hits.load(Ordering::Relaxed);
    let delivery = bus.post(&Tick).unwrap();
    assert_eq!(delivery.invoked, 4);
    assert_eq!(hits.load(Ordering::Relaxed), before + 4);
}
