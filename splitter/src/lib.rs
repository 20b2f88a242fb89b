//! A two-way value splitter for the Casper platform.
//!
//! A depositor attaches value to a `split` call naming two receivers. Each receiver is credited
//! half of the deposit, and the mote lost to truncation is credited back to the depositor. Credited
//! balances stay in the splitter's custody until their holder calls `withdraw`.
//!
//! The ledger logic lives in the [`Splitter`] trait and only talks to its host through the
//! [`RuntimeProvider`], [`StorageProvider`] and [`SystemProvider`] traits. The host is expected to
//! execute every call atomically: when a method returns an error, every effect of that call,
//! including written balances, moved value and emitted events, must be discarded.
//!
//! # `no_std`
//!
//! By default, the library is `no_std`, however you can enable full `std` functionality by enabling
//! the crate's `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub mod constants;
mod detail;
mod error;
mod events;
mod providers;

use tracing::{debug, warn};

use casper_types::{account::AccountHash, U512};

pub use detail::{is_valid_recipient, split_amounts, SplitAmounts, NULL_ACCOUNT};
pub use error::Error;
pub use events::{FundsWithdrawn, SplitPerformed, SplitterEvent, SplitterEventTag};
pub use providers::{RuntimeProvider, StorageProvider, SystemProvider};

/// Splitter trait.
pub trait Splitter: RuntimeProvider + StorageProvider + SystemProvider {
    /// Takes custody of `amount` attached by the caller, credits half of it to each receiver and
    /// credits the truncation remainder back to the caller.
    fn split(
        &mut self,
        receiver1: AccountHash,
        receiver2: AccountHash,
        amount: U512,
    ) -> Result<SplitAmounts, Error> {
        let sender = self.get_caller();

        let amounts = split_amounts(amount).map_err(|error| {
            warn!(%sender, %amount, %error, "rejected split");
            error
        })?;
        if !is_valid_recipient(&receiver1) || !is_valid_recipient(&receiver2) {
            warn!(%sender, %receiver1, %receiver2, "rejected split with null receiver");
            return Err(Error::InvalidRecipient);
        }

        self.accept_deposit(amount).map_err(|error| {
            warn!(%sender, %amount, %error, "unable to take custody of deposit");
            Error::DepositFailed
        })?;

        detail::credit(self, receiver1, amounts.share)?;
        detail::credit(self, receiver2, amounts.share)?;
        if !amounts.remainder.is_zero() {
            detail::credit(self, sender, amounts.remainder)?;
        }

        debug!(
            %sender,
            %receiver1,
            %receiver2,
            share = %amounts.share,
            remainder = %amounts.remainder,
            "split performed"
        );

        self.emit_event(
            SplitPerformed {
                sender,
                receiver1,
                receiver2,
                amount_each_received: amounts.share,
                remainder: amounts.remainder,
            }
            .into(),
        )?;

        Ok(amounts)
    }

    /// Pays the caller's entire credited balance out to the caller and returns the amount paid.
    fn withdraw(&mut self) -> Result<U512, Error> {
        let withdrawer = self.get_caller();

        let amount = self.read_balance(withdrawer)?.unwrap_or_default();
        if amount.is_zero() {
            warn!(%withdrawer, "rejected withdrawal of empty balance");
            return Err(Error::NoBalance);
        }

        // Must be zeroed before the transfer: the receiving account may call back into `withdraw`.
        self.write_balance(withdrawer, U512::zero())?;

        self.transfer_to_account(withdrawer, amount).map_err(|error| {
            warn!(%withdrawer, %amount, %error, "outgoing transfer failed");
            Error::TransferFailed
        })?;

        debug!(%withdrawer, %amount, "funds withdrawn");

        self.emit_event(FundsWithdrawn { withdrawer, amount }.into())?;

        Ok(amount)
    }

    /// Returns the credited balance of `account`.
    fn balance_of(&mut self, account: AccountHash) -> Result<U512, Error> {
        Ok(self.read_balance(account)?.unwrap_or_default())
    }
}
