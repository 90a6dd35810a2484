//! # Bus builder.
//!
//! Mirrors the two-step setup of a bus: pick a [`BusConfig`], attach the
//! subscribers known at startup, then [`build`](BusBuilder::build).

use std::sync::Arc;

use crate::core::{BusConfig, EventBus};
use crate::subscribers::Subscribe;

/// Builder for an [`EventBus`] with subscribers attached up front.
pub struct BusBuilder {
    cfg: BusConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl BusBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets the subscribers registered by [`build`](Self::build).
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Adds one subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Builds the bus and registers every subscriber, in the order given.
    pub fn build(self) -> EventBus {
        let bus = EventBus::new(self.cfg);
        for sub in self.subscribers {
            bus.register_subscriber(sub);
        }
        bus
    }
}
