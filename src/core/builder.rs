use std::sync::Arc;

use crate::{
    core::RegistryConfig,
    observers::{Observer, ObserverSet},
    subscribers::{Subscribe, SubscriberSet},
};

use super::registry::Registry;

/// Builder for constructing a [`Registry`] with observers and subscribers.
pub struct RegistryBuilder {
    cfg: RegistryConfig,
    observers: Vec<Arc<dyn Observer>>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl RegistryBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: RegistryConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Sets post-processing observers.
    ///
    /// Observers bracket every object's init hooks, invoked in the given order.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observer>>) -> Self {
        self.observers = observers;
        self
    }

    /// Appends a single observer after the ones already set.
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Sets event subscribers for observability.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Appends a single subscriber after the ones already set.
    pub fn subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Builds and returns the registry.
    pub fn build(self) -> Registry {
        Registry::from_parts(
            self.cfg,
            ObserverSet::new(self.observers),
            SubscriberSet::new(self.subscribers),
        )
    }
}
