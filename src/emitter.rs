//! Sinks for finished scroll notifications.
//!
//! [`WheelDispatch`](crate::wheel::WheelDispatch) never knows who consumes its
//! output; it hands every [`AxisEvent`] to an [`AxisEmitter`]. The crate ships
//! three emitters:
//!
//! - `Vec<AxisEvent>`: records everything, handy for tests and batching.
//! - [`AxisBus`]: fans out to several registered emitters with per-listener filters.
//! - [`AxisLogger`](crate::logger::AxisLogger): writes notifications to the `log` facade.

use crate::event::{AxisEvent, AxisKind};
use std::collections::HashMap;

/// Receives finished scroll-axis notifications.
pub trait AxisEmitter: Send {
    fn notify_axis(&mut self, event: &AxisEvent);
}

impl AxisEmitter for Vec<AxisEvent> {
    fn notify_axis(&mut self, event: &AxisEvent) {
        self.push(*event);
    }
}

/// Determines which notifications a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EmitterFilter {
    All,
    /// High-resolution wheel notifications only.
    WheelOnly,
    /// Legacy click notifications only.
    LegacyOnly,
    ContinuousOnly,
    Custom(fn(&AxisEvent) -> bool),
}

impl EmitterFilter {
    fn accepts(&self, event: &AxisEvent) -> bool {
        match self {
            Self::All => true,
            Self::WheelOnly => matches!(event.kind, AxisKind::Wheel { .. }),
            Self::LegacyOnly => matches!(event.kind, AxisKind::LegacyWheel { .. }),
            Self::ContinuousOnly => matches!(event.kind, AxisKind::Continuous { .. }),
            Self::Custom(f) => f(event),
        }
    }
}

struct ListenerEntry {
    listener: Box<dyn AxisEmitter>,
    enabled: bool,
    filter: EmitterFilter,
}

/// Fan-out emitter with filtering and mute control.
pub struct AxisBus {
    next_id: u64,
    listeners: HashMap<u64, ListenerEntry>,
}

impl Default for AxisBus {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: HashMap::new(),
        }
    }

    /// Registers a listener and returns its id.
    pub fn add_listener(
        &mut self,
        listener: impl AxisEmitter + 'static,
        filter: EmitterFilter,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl AxisEmitter for AxisBus {
    fn notify_axis(&mut self, event: &AxisEvent) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.filter.accepts(event) {
                entry.listener.notify_axis(event);
            }
        }
    }
}
