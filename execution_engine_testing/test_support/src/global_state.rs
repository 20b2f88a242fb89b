use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

use tracing::debug;

use casper_splitter::SplitterEvent;
use casper_types::{account::AccountHash, U512};

/// Address of a value held by the in-memory host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateKey {
    /// An entry of the splitter's balance table.
    Balance(AccountHash),
    /// The main purse of an account, outside of the splitter.
    MainPurse(AccountHash),
    /// The purse holding every credited but unwithdrawn mote.
    CustodyPurse,
}

impl Display for StateKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            StateKey::Balance(account) => write!(formatter, "balance-{}", account),
            StateKey::MainPurse(account) => write!(formatter, "main-purse-{}", account),
            StateKey::CustodyPurse => formatter.write_str("custody-purse"),
        }
    }
}

/// Provides read access to host state.
pub trait StateReader {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &StateKey) -> Option<U512>;
}

/// The writes and events produced by a successful call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub(crate) writes: BTreeMap<StateKey, U512>,
    pub(crate) events: Vec<SplitterEvent>,
}

impl Effects {
    /// Values written by the call, keyed by address.
    pub fn writes(&self) -> &BTreeMap<StateKey, U512> {
        &self.writes
    }

    /// Events emitted by the call, in emission order.
    pub fn events(&self) -> &[SplitterEvent] {
        &self.events
    }

    /// Returns `true` if the call changed nothing.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.events.is_empty()
    }
}

/// Committed state of the in-memory host.
#[derive(Clone, Debug, Default)]
pub struct GlobalState {
    values: BTreeMap<StateKey, U512>,
    events: Vec<SplitterEvent>,
}

impl GlobalState {
    /// Creates an empty global state.
    pub fn new() -> Self {
        GlobalState::default()
    }

    /// Applies `effects` on top of the current state.
    pub fn commit(&mut self, effects: Effects) {
        debug!(
            write_count = effects.writes.len(),
            event_count = effects.events.len(),
            "GlobalState::commit"
        );
        self.values.extend(effects.writes);
        self.events.extend(effects.events);
    }

    /// Sets the value under `key` directly, bypassing any call.
    pub(crate) fn put(&mut self, key: StateKey, value: U512) {
        self.values.insert(key, value);
    }

    /// Every event committed so far.
    pub fn events(&self) -> &[SplitterEvent] {
        &self.events
    }

    /// Sum of every entry of the balance table.
    pub fn total_credited(&self) -> U512 {
        self.values
            .iter()
            .filter(|(key, _)| matches!(key, StateKey::Balance(_)))
            .fold(U512::zero(), |total, (_, value)| total + *value)
    }

    /// Sum of every purse, the custody purse included.
    pub fn total_purses(&self) -> U512 {
        self.values
            .iter()
            .filter(|(key, _)| !matches!(key, StateKey::Balance(_)))
            .fold(U512::zero(), |total, (_, value)| total + *value)
    }
}

impl StateReader for GlobalState {
    fn read(&self, key: &StateKey) -> Option<U512> {
        self.values.get(key).copied()
    }
}
