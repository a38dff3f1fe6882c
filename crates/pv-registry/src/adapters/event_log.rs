use crate::config::DEFAULT_MAX_EVENT_LOG_LEN;
use crate::domain::PropertyId;
use crate::events::RegistryEvent;
use crate::ports::EventSink;
use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::trace;

/// In-memory event recorder, mainly for tests and audits.
///
/// Keeps at most `capacity` events; once full, the oldest are dropped.
#[derive(Debug)]
pub struct InMemoryEventLog {
    events: RwLock<VecDeque<RegistryEvent>>,
    capacity: usize,
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_EVENT_LOG_LEN)
    }
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log retaining the `capacity` most recent events (at least one).
    pub fn bounded(capacity: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the retained events, oldest first.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Retained events concerning a single property, oldest first.
    pub fn events_for(&self, property_id: PropertyId) -> Vec<RegistryEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.property_id() == Some(property_id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Remove and return all retained events.
    pub fn drain(&self) -> Vec<RegistryEvent> {
        self.events.write().drain(..).collect()
    }
}

impl EventSink for InMemoryEventLog {
    fn emit(&self, event: RegistryEvent) {
        trace!(topic = event.topic(), "Recording registry event");
        let mut events = self.events.write();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: RegistryEvent) {}
}
