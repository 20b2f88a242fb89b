use casper_types::{account::AccountHash, U512};

use crate::{call_context::SplitterCall, DEFAULT_ACCOUNT_ADDR};

/// A call into the splitter made by a single account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecuteRequest {
    /// The account making the call.
    pub caller: AccountHash,
    /// The call itself.
    pub call: SplitterCall,
}

/// Builds an [`ExecuteRequest`].
#[derive(Debug)]
pub struct ExecuteRequestBuilder {
    caller: AccountHash,
    call: SplitterCall,
}

impl ExecuteRequestBuilder {
    /// Returns an [`ExecuteRequestBuilder`] for a split of `amount` made by `caller`.
    pub fn split(
        caller: AccountHash,
        receiver1: AccountHash,
        receiver2: AccountHash,
        amount: U512,
    ) -> Self {
        ExecuteRequestBuilder {
            caller,
            call: SplitterCall::Split {
                receiver1,
                receiver2,
                amount,
            },
        }
    }

    /// Returns an [`ExecuteRequestBuilder`] for a withdrawal made by `caller`.
    pub fn withdraw(caller: AccountHash) -> Self {
        ExecuteRequestBuilder {
            caller,
            call: SplitterCall::Withdraw,
        }
    }

    /// Returns an [`ExecuteRequestBuilder`] querying the credited balance of `account`.
    ///
    /// Queries are made by [`DEFAULT_ACCOUNT_ADDR`] unless changed with
    /// [`ExecuteRequestBuilder::with_caller`].
    pub fn balance_of(account: AccountHash) -> Self {
        ExecuteRequestBuilder {
            caller: *DEFAULT_ACCOUNT_ADDR,
            call: SplitterCall::BalanceOf { account },
        }
    }

    /// Sets the account making the call.
    pub fn with_caller(mut self, caller: AccountHash) -> Self {
        self.caller = caller;
        self
    }

    /// Consumes self and returns an [`ExecuteRequest`].
    pub fn build(self) -> ExecuteRequest {
        let ExecuteRequestBuilder { caller, call } = self;
        ExecuteRequest { caller, call }
    }
}
