//! Named keys, entry points and runtime argument names shared by the splitter contract, its
//! session code and the test harnesses.

/// Named constant for `receiver1`.
pub const ARG_RECEIVER1: &str = "receiver1";
/// Named constant for `receiver2`.
pub const ARG_RECEIVER2: &str = "receiver2";
/// Named constant for `amount`.
pub const ARG_AMOUNT: &str = "amount";
/// Named constant for `purse`.
pub const ARG_PURSE: &str = "purse";
/// Named constant for `account`.
pub const ARG_ACCOUNT: &str = "account";

/// Named constant for method `split`.
pub const METHOD_SPLIT: &str = "split";
/// Named constant for method `withdraw`.
pub const METHOD_WITHDRAW: &str = "withdraw";
/// Named constant for method `balance_of`.
pub const METHOD_BALANCE_OF: &str = "balance_of";

/// Storage for splitter contract hash.
pub const HASH_KEY: &str = "splitter_contract_hash";
/// Storage for splitter contract package access key.
pub const ACCESS_KEY: &str = "splitter_access";
/// Storage for the dictionary of credited balances.
pub const BALANCES_KEY: &str = "balances";
/// Storage for the purse holding every credited but unwithdrawn mote.
pub const CUSTODY_PURSE_KEY: &str = "custody_purse";

/// Message topic under which [`crate::SplitterEvent`]s are emitted.
pub const EVENTS_TOPIC: &str = "splitter_events";
