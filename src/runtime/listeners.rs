//! Configuration listeners and their subscription handles.
//!
//! Listeners wait for a configuration to become available. The registry fires
//! them in registration order, outside its own lock, so a callback may read
//! the runtime or register further listeners while being notified.

use crate::config::Configuration;
use std::sync::{Arc, Mutex, Weak};

pub(crate) type Listener = Arc<dyn Fn(&Arc<Configuration>) + Send + Sync>;

struct ListenerEntry {
    id: u64,
    callback: Listener,
    once: bool,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<ListenerEntry>,
}

/// The set of callbacks awaiting configuration availability.
#[derive(Default)]
pub(crate) struct ListenerSet {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and hands back its subscription. `once` entries
    /// self-remove after their first invocation.
    pub fn add(&self, callback: Listener, once: bool) -> Subscription {
        let mut registry = self.inner.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(ListenerEntry { id, callback, once });
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Invokes every registered callback with `config`, in registration
    /// order. One-shot entries are unregistered before their callback runs.
    pub fn flush(&self, config: &Arc<Configuration>) {
        let callbacks: Vec<Listener> = {
            let mut registry = self.inner.lock().unwrap();
            let callbacks = registry
                .entries
                .iter()
                .map(|entry| Arc::clone(&entry.callback))
                .collect();
            registry.entries.retain(|entry| !entry.once);
            callbacks
        };
        if !callbacks.is_empty() {
            log::debug!("notifying {} configuration listener(s)", callbacks.len());
        }
        for callback in callbacks {
            callback(config);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|registry| registry.entries.len()).unwrap_or(0)
    }
}

/// A handle to a registered listener.
///
/// Dropping the handle unsubscribes the listener; [`Subscription::detach`]
/// keeps it registered for the life of the runtime.
#[must_use = "dropping a Subscription unsubscribes its listener; call detach() to keep it registered"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// A handle for a listener that already ran and was never registered.
    pub(crate) fn settled() -> Self {
        Self {
            id: 0,
            registry: Weak::new(),
        }
    }

    /// Keeps the listener registered forever.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }

    /// Unsubscribes explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {}

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        match self.registry.upgrade() {
            Some(inner) => inner
                .lock()
                .map(|registry| registry.entries.iter().any(|entry| entry.id == self.id))
                .unwrap_or(false),
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut registry) = inner.lock() {
                registry.entries.retain(|entry| entry.id != self.id);
            }
        }
    }
}
