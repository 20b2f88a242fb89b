use std::collections::BTreeMap;

use casper_splitter::SplitterEvent;
use casper_types::U512;

use crate::global_state::{Effects, StateKey, StateReader};

/// A view of global state which buffers the writes and events of a call.
///
/// Nothing reaches the underlying state until the accumulated [`Effects`] are committed, so a
/// failed call is rolled back by dropping its tracking copy.
#[derive(Debug)]
pub struct TrackingCopy<'a, R: StateReader> {
    reader: &'a R,
    cache: BTreeMap<StateKey, U512>,
    events: Vec<SplitterEvent>,
}

impl<'a, R: StateReader> TrackingCopy<'a, R> {
    /// Creates a tracking copy reading through to `reader`.
    pub fn new(reader: &'a R) -> Self {
        TrackingCopy {
            reader,
            cache: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Returns a child copy for a nested frame. Its effects are folded back with
    /// [`TrackingCopy::merge`] when the frame succeeds and dropped otherwise.
    pub fn fork(&self) -> Self {
        TrackingCopy {
            reader: self.reader,
            cache: self.cache.clone(),
            events: self.events.clone(),
        }
    }

    /// Adopts the state of a child created by [`TrackingCopy::fork`].
    pub fn merge(&mut self, child: Self) {
        self.cache = child.cache;
        self.events = child.events;
    }

    /// Reads the value under `key`, preferring buffered writes.
    pub fn read(&self, key: &StateKey) -> Option<U512> {
        self.cache
            .get(key)
            .copied()
            .or_else(|| self.reader.read(key))
    }

    /// Buffers a write of `value` under `key`.
    pub fn write(&mut self, key: StateKey, value: U512) {
        self.cache.insert(key, value);
    }

    /// Buffers `event`.
    pub fn emit_event(&mut self, event: SplitterEvent) {
        self.events.push(event);
    }

    /// Returns the effects accumulated so far.
    pub fn effects(&self) -> Effects {
        Effects {
            writes: self.cache.clone(),
            events: self.events.clone(),
        }
    }
}
