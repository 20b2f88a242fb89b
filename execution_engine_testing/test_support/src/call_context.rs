use std::collections::BTreeMap;

use tracing::{debug, warn};

use casper_splitter::{
    Error, RuntimeProvider, SplitAmounts, Splitter, SplitterEvent, StorageProvider,
    SystemProvider,
};
use casper_types::{account::AccountHash, U512};

use crate::{
    global_state::{Effects, GlobalState, StateKey},
    tracking_copy::TrackingCopy,
};

/// A call into the splitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitterCall {
    /// `split(receiver1, receiver2)` with `amount` attached.
    Split {
        /// First receiver.
        receiver1: AccountHash,
        /// Second receiver.
        receiver2: AccountHash,
        /// Value attached by the caller.
        amount: U512,
    },
    /// `withdraw()`.
    Withdraw,
    /// `balance_of(account)`.
    BalanceOf {
        /// Account to query.
        account: AccountHash,
    },
}

/// Value returned by a successful [`SplitterCall`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallOutcome {
    /// Shares credited by a split.
    Split(SplitAmounts),
    /// Amount paid out by a withdrawal.
    Withdraw(U512),
    /// Credited balance of the queried account.
    BalanceOf(U512),
}

/// How an account reacts while the splitter pays it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecipientBehaviour {
    /// Takes the payment.
    #[default]
    Accept,
    /// Refuses the payment, failing the transfer.
    Reject,
    /// Takes the payment and immediately calls `withdraw` again.
    ReenterWithdraw,
    /// Takes the payment and immediately deposits into a new split.
    ReenterSplit {
        /// First receiver of the nested split.
        receiver1: AccountHash,
        /// Second receiver of the nested split.
        receiver2: AccountHash,
        /// Value attached to the nested split.
        amount: U512,
    },
}

/// A call a receiving account made back into the splitter from inside a transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReentryAttempt {
    /// The receiving account.
    pub caller: AccountHash,
    /// Height of the nested frame; the top level call is at height 1.
    pub depth: u32,
    /// The nested call.
    pub call: SplitterCall,
    /// What the nested call returned. A failed nested call leaves no effects behind but does not
    /// fail the transfer that triggered it.
    pub result: Result<CallOutcome, Error>,
}

/// One frame of execution against the in-memory host.
pub struct CallContext<'a, 'b> {
    caller: AccountHash,
    depth: u32,
    max_call_depth: u32,
    tracking_copy: TrackingCopy<'a, GlobalState>,
    behaviours: &'b BTreeMap<AccountHash, RecipientBehaviour>,
    reentries: &'b mut Vec<ReentryAttempt>,
}

impl<'a, 'b> CallContext<'a, 'b> {
    /// Creates the top level frame of a call made by `caller`.
    pub fn new(
        caller: AccountHash,
        global_state: &'a GlobalState,
        max_call_depth: u32,
        behaviours: &'b BTreeMap<AccountHash, RecipientBehaviour>,
        reentries: &'b mut Vec<ReentryAttempt>,
    ) -> Self {
        CallContext {
            caller,
            depth: 1,
            max_call_depth,
            tracking_copy: TrackingCopy::new(global_state),
            behaviours,
            reentries,
        }
    }

    /// Runs `call` within this frame.
    pub fn execute(&mut self, call: &SplitterCall) -> Result<CallOutcome, Error> {
        match call {
            SplitterCall::Split {
                receiver1,
                receiver2,
                amount,
            } => self
                .split(*receiver1, *receiver2, *amount)
                .map(CallOutcome::Split),
            SplitterCall::Withdraw => self.withdraw().map(CallOutcome::Withdraw),
            SplitterCall::BalanceOf { account } => {
                self.balance_of(*account).map(CallOutcome::BalanceOf)
            }
        }
    }

    /// Returns the effects buffered by this frame.
    pub fn effects(&self) -> Effects {
        self.tracking_copy.effects()
    }

    fn read_or_zero(&self, key: StateKey) -> U512 {
        self.tracking_copy.read(&key).unwrap_or_default()
    }

    fn reenter(&mut self, caller: AccountHash, call: SplitterCall) -> Result<(), Error> {
        let depth = self.depth + 1;
        if depth > self.max_call_depth {
            warn!(%caller, depth, "call depth exceeded while receiving transfer");
            return Err(Error::TransferFailed);
        }

        let mut child = CallContext {
            caller,
            depth,
            max_call_depth: self.max_call_depth,
            tracking_copy: self.tracking_copy.fork(),
            behaviours: self.behaviours,
            reentries: &mut *self.reentries,
        };
        let result = child.execute(&call);
        let CallContext { tracking_copy, .. } = child;

        match &result {
            Ok(_) => self.tracking_copy.merge(tracking_copy),
            Err(error) => debug!(%caller, depth, %error, "re-entrant call failed"),
        }

        self.reentries.push(ReentryAttempt {
            caller,
            depth,
            call,
            result,
        });
        Ok(())
    }
}

impl RuntimeProvider for CallContext<'_, '_> {
    fn get_caller(&self) -> AccountHash {
        self.caller
    }

    fn emit_event(&mut self, event: SplitterEvent) -> Result<(), Error> {
        self.tracking_copy.emit_event(event);
        Ok(())
    }
}

impl StorageProvider for CallContext<'_, '_> {
    fn read_balance(&mut self, account: AccountHash) -> Result<Option<U512>, Error> {
        Ok(self.tracking_copy.read(&StateKey::Balance(account)))
    }

    fn write_balance(&mut self, account: AccountHash, amount: U512) -> Result<(), Error> {
        self.tracking_copy.write(StateKey::Balance(account), amount);
        Ok(())
    }
}

impl SystemProvider for CallContext<'_, '_> {
    fn accept_deposit(&mut self, amount: U512) -> Result<(), Error> {
        let source = StateKey::MainPurse(self.caller);
        let source_balance = self
            .read_or_zero(source)
            .checked_sub(amount)
            .ok_or(Error::DepositFailed)?;
        let custody_balance = self
            .read_or_zero(StateKey::CustodyPurse)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        self.tracking_copy.write(source, source_balance);
        self.tracking_copy.write(StateKey::CustodyPurse, custody_balance);
        Ok(())
    }

    fn transfer_to_account(&mut self, target: AccountHash, amount: U512) -> Result<(), Error> {
        let behaviour = self.behaviours.get(&target).cloned().unwrap_or_default();
        if behaviour == RecipientBehaviour::Reject {
            return Err(Error::TransferFailed);
        }

        let custody_balance = self
            .read_or_zero(StateKey::CustodyPurse)
            .checked_sub(amount)
            .ok_or(Error::TransferFailed)?;
        let target_purse = StateKey::MainPurse(target);
        let target_balance = self
            .read_or_zero(target_purse)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        self.tracking_copy.write(StateKey::CustodyPurse, custody_balance);
        self.tracking_copy.write(target_purse, target_balance);

        match behaviour {
            RecipientBehaviour::Accept | RecipientBehaviour::Reject => Ok(()),
            RecipientBehaviour::ReenterWithdraw => self.reenter(target, SplitterCall::Withdraw),
            RecipientBehaviour::ReenterSplit {
                receiver1,
                receiver2,
                amount,
            } => self.reenter(
                target,
                SplitterCall::Split {
                    receiver1,
                    receiver2,
                    amount,
                },
            ),
        }
    }
}

impl Splitter for CallContext<'_, '_> {}
