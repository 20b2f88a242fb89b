use casper_types::{account::AccountHash, U512};

use crate::{Error, SplitterEvent};

/// Provider of runtime host functionality.
pub trait RuntimeProvider {
    /// This method should return the caller of the current context.
    fn get_caller(&self) -> AccountHash;

    /// Publishes `event` as part of the current call. Events emitted by a call which later fails
    /// must not become observable.
    fn emit_event(&mut self, event: SplitterEvent) -> Result<(), Error>;
}

/// Provides access to the balance table.
pub trait StorageProvider {
    /// Reads the credited balance of `account`. `None` means the account was never credited.
    fn read_balance(&mut self, account: AccountHash) -> Result<Option<U512>, Error>;

    /// Writes the credited balance of `account`.
    fn write_balance(&mut self, account: AccountHash, amount: U512) -> Result<(), Error>;
}

/// Provides the value transfer primitives of the host.
pub trait SystemProvider {
    /// Moves `amount` attached to the current call into the splitter's custody.
    fn accept_deposit(&mut self, amount: U512) -> Result<(), Error>;

    /// Transfers `amount` out of the splitter's custody to the `target` account.
    ///
    /// The target may run its own logic while receiving, including calling back into the
    /// splitter.
    fn transfer_to_account(&mut self, target: AccountHash, amount: U512) -> Result<(), Error>;
}
