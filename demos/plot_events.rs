//! # Example: plot events
//!
//! A land-claim bus with three subscribers:
//! - `guard` (Lowest) cancels claims on reserved plots;
//! - `economy` (Normal) charges the claimer and fails for broke players;
//! - `audit` (Monitor) records every claim that got through.
//!
//! Run with `RUST_LOG=eventvisor=debug` to see registration and failure logs.

use std::sync::{Arc, Mutex};

use eventvisor::{
    BusConfig, CancelFlag, Cancellable, Event, EventBus, Order, Registrar, Subscribe, SubscriberId,
};
use tracing_subscriber::EnvFilter;

struct PlotClaim {
    plot: u32,
    player: &'static str,
    cancelled: CancelFlag,
}

impl PlotClaim {
    fn new(plot: u32, player: &'static str) -> Self {
        Self {
            plot,
            player,
            cancelled: CancelFlag::new(),
        }
    }
}

impl Cancellable for PlotClaim {
    fn is_cancelled(&self) -> bool {
        self.cancelled.is_set()
    }
    fn set_cancelled(&self, cancelled: bool) {
        self.cancelled.set(cancelled);
    }
}

impl Event for PlotClaim {
    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        Some(self)
    }
}

struct Guard {
    reserved: Vec<u32>,
}

impl Subscribe for Guard {
    fn id(&self) -> SubscriberId {
        SubscriberId::new("guard")
    }

    fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>) {
        registrar.on(Order::Lowest, "reserved", move |ev: &PlotClaim| {
            if self.reserved.contains(&ev.plot) {
                println!("guard: plot {} is reserved", ev.plot);
                ev.set_cancelled(true);
            }
            Ok(())
        });
    }
}

struct Economy;

impl Subscribe for Economy {
    fn id(&self) -> SubscriberId {
        SubscriberId::new("economy")
    }

    fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>) {
        registrar.on_default("charge", |ev: &PlotClaim| {
            if ev.player == "mallory" {
                return Err(format!("{} cannot afford plot {}", ev.player, ev.plot).into());
            }
            println!("economy: charged {} for plot {}", ev.player, ev.plot);
            Ok(())
        });
    }
}

#[derive(Default)]
struct Audit {
    claims: Mutex<Vec<u32>>,
}

impl Subscribe for Audit {
    fn id(&self) -> SubscriberId {
        SubscriberId::new("audit")
    }

    fn subscribe(self: Arc<Self>, registrar: &mut Registrar<'_>) {
        registrar.on(Order::Monitor, "record", move |ev: &PlotClaim| {
            self.claims
                .lock()
                .map_err(|_| "audit log poisoned")?
                .push(ev.plot);
            Ok(())
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let audit = Arc::new(Audit::default());
    let subs: Vec<Arc<dyn Subscribe>> = vec![
        audit.clone(),
        Arc::new(Economy),
        Arc::new(Guard { reserved: vec![1] }),
    ];
    let bus = EventBus::builder(BusConfig::default())
        .with_subscribers(subs)
        .build();

    for claim in [
        PlotClaim::new(1, "alice"),
        PlotClaim::new(2, "alice"),
        PlotClaim::new(3, "mallory"),
    ] {
        let d = bus.post(&claim)?;
        println!(
            "plot {}: invoked={} skipped={} failed={}",
            claim.plot,
            d.invoked,
            d.skipped,
            d.failures.len()
        );
    }

    bus.unregister_subscriber(&SubscriberId::new("guard"));
    bus.post(&PlotClaim::new(1, "bob"))?;

    let claims = audit.claims.lock().map_err(|_| "audit log poisoned")?;
    println!("audited plots: {:?}", *claims);
    Ok(())
}
