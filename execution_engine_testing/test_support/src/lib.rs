//! A library to support testing of the splitter.
//!
//! Calls run against an in-memory host: a committed [`GlobalState`], a [`TrackingCopy`] buffering
//! each call's effects, and accounts whose reaction to incoming transfers is scripted through
//! [`RecipientBehaviour`].
#![warn(missing_docs)]

mod call_context;
mod execute_request_builder;
mod global_state;
pub mod logging;
mod splitter_config;
mod splitter_test_builder;
mod tracking_copy;

use once_cell::sync::Lazy;

use casper_types::{account::AccountHash, PublicKey, SecretKey};

pub use call_context::{
    CallContext, CallOutcome, RecipientBehaviour, ReentryAttempt, SplitterCall,
};
pub use execute_request_builder::{ExecuteRequest, ExecuteRequestBuilder};
pub use global_state::{Effects, GlobalState, StateKey, StateReader};
pub use splitter_config::{
    CoreConfig, Error as ConfigError, SplitterConfig, CONFIG_NAME, DEFAULT_ACCOUNT_BALANCE,
    DEFAULT_MAX_CALL_DEPTH, LOCAL_PATH,
};
pub use splitter_test_builder::{ExecutionResult, SplitterTestBuilder};
pub use tracking_copy::TrackingCopy;

/// Default test account public key.
pub static DEFAULT_ACCOUNT_PUBLIC_KEY: Lazy<PublicKey> = Lazy::new(|| {
    let secret_key = SecretKey::ed25519_from_bytes([199; SecretKey::ED25519_LENGTH]).unwrap();
    PublicKey::from(&secret_key)
});
/// Default test account address.
pub static DEFAULT_ACCOUNT_ADDR: Lazy<AccountHash> =
    Lazy::new(|| DEFAULT_ACCOUNT_PUBLIC_KEY.to_account_hash());
