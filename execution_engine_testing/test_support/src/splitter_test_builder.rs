use std::collections::BTreeMap;

use tracing::{debug, info};

use casper_splitter::{Error, SplitAmounts, SplitterEvent};
use casper_types::{account::AccountHash, U512};

use crate::{
    call_context::{CallContext, CallOutcome, RecipientBehaviour, ReentryAttempt, SplitterCall},
    execute_request_builder::{ExecuteRequest, ExecuteRequestBuilder},
    global_state::{Effects, GlobalState, StateKey, StateReader},
    logging,
    splitter_config::SplitterConfig,
    DEFAULT_ACCOUNT_ADDR,
};

/// The result of running one [`ExecuteRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    caller: AccountHash,
    call: SplitterCall,
    result: Result<CallOutcome, Error>,
    effects: Effects,
}

impl ExecutionResult {
    /// Returns `true` if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` if the call failed.
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Returns the error of a failed call.
    pub fn as_error(&self) -> Option<Error> {
        self.result.err()
    }

    /// Returns the value of a successful call.
    pub fn outcome(&self) -> Option<CallOutcome> {
        self.result.ok()
    }

    /// The account which made the call.
    pub fn caller(&self) -> AccountHash {
        self.caller
    }

    /// The call itself.
    pub fn call(&self) -> &SplitterCall {
        &self.call
    }

    /// Effects of the call. Always empty for a failed call.
    pub fn effects(&self) -> &Effects {
        &self.effects
    }
}

/// Runs splitter calls against an in-memory host and commits their effects.
///
/// Mirrors the exec/commit/expect cycle of an engine test: [`SplitterTestBuilder::exec`] runs a
/// request against the last committed state, [`SplitterTestBuilder::commit`] applies its effects.
pub struct SplitterTestBuilder {
    config: SplitterConfig,
    global_state: GlobalState,
    behaviours: BTreeMap<AccountHash, RecipientBehaviour>,
    exec_results: Vec<ExecutionResult>,
    reentries: Vec<ReentryAttempt>,
    pending: Option<Effects>,
}

impl Default for SplitterTestBuilder {
    fn default() -> Self {
        Self::new_with_config(SplitterConfig::default())
    }
}

impl SplitterTestBuilder {
    /// Creates a builder with the default config. [`DEFAULT_ACCOUNT_ADDR`] is registered and
    /// funded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder using the config shipped in `resources/local/`.
    pub fn new_with_local_config() -> Self {
        let config = SplitterConfig::from_local_path().expect("should load local config");
        Self::new_with_config(config)
    }

    /// Creates a builder using `config`.
    pub fn new_with_config(config: SplitterConfig) -> Self {
        let _ = logging::init_with_config(config.logging());

        let mut builder = SplitterTestBuilder {
            config,
            global_state: GlobalState::new(),
            behaviours: BTreeMap::new(),
            exec_results: Vec::new(),
            reentries: Vec::new(),
            pending: None,
        };
        builder.with_account(*DEFAULT_ACCOUNT_ADDR);
        builder
    }

    /// Registers `account` with the configured default main purse balance.
    pub fn with_account(&mut self, account: AccountHash) -> &mut Self {
        let balance = self.config.default_account_balance();
        self.with_funded_account(account, balance)
    }

    /// Registers `account` with a main purse holding `balance`.
    pub fn with_funded_account(&mut self, account: AccountHash, balance: U512) -> &mut Self {
        self.global_state.put(StateKey::MainPurse(account), balance);
        self
    }

    /// Sets how `account` reacts when the splitter pays it.
    pub fn with_behaviour(
        &mut self,
        account: AccountHash,
        behaviour: RecipientBehaviour,
    ) -> &mut Self {
        self.behaviours.insert(account, behaviour);
        self
    }

    /// Runs `request` against the last committed state. The effects are held until
    /// [`SplitterTestBuilder::commit`] is called.
    pub fn exec(&mut self, request: ExecuteRequest) -> &mut Self {
        let ExecuteRequest { caller, call } = request;
        let mut reentries = Vec::new();
        let (result, effects) = self.run(caller, &call, &mut reentries);

        match &result {
            Ok(outcome) => debug!(%caller, ?call, ?outcome, "execution succeeded"),
            Err(error) => info!(%caller, ?call, %error, "execution failed"),
        }

        self.reentries.extend(reentries);
        self.pending = Some(effects.clone());
        self.exec_results.push(ExecutionResult {
            caller,
            call,
            result,
            effects,
        });
        self
    }

    /// Applies the effects of the last exec. Does nothing if they were already committed.
    pub fn commit(&mut self) -> &mut Self {
        if let Some(effects) = self.pending.take() {
            self.global_state.commit(effects);
        }
        self
    }

    /// Runs and commits a split of `amount` made by `caller`.
    pub fn split(
        &mut self,
        caller: AccountHash,
        receiver1: AccountHash,
        receiver2: AccountHash,
        amount: U512,
    ) -> &mut Self {
        let request = ExecuteRequestBuilder::split(caller, receiver1, receiver2, amount).build();
        self.exec(request).commit()
    }

    /// Runs and commits a withdrawal made by `caller`.
    pub fn withdraw(&mut self, caller: AccountHash) -> &mut Self {
        let request = ExecuteRequestBuilder::withdraw(caller).build();
        self.exec(request).commit()
    }

    /// Runs a split against the committed state and discards its effects.
    pub fn dry_run_split(
        &self,
        caller: AccountHash,
        receiver1: AccountHash,
        receiver2: AccountHash,
        amount: U512,
    ) -> Result<SplitAmounts, Error> {
        let call = SplitterCall::Split {
            receiver1,
            receiver2,
            amount,
        };
        match self.run(caller, &call, &mut Vec::new()).0? {
            CallOutcome::Split(amounts) => Ok(amounts),
            outcome => panic!("unexpected outcome of split: {:?}", outcome),
        }
    }

    /// Runs a withdrawal against the committed state and discards its effects.
    pub fn dry_run_withdraw(&self, caller: AccountHash) -> Result<U512, Error> {
        match self.run(caller, &SplitterCall::Withdraw, &mut Vec::new()).0? {
            CallOutcome::Withdraw(amount) => Ok(amount),
            outcome => panic!("unexpected outcome of withdraw: {:?}", outcome),
        }
    }

    /// Panics unless the last exec succeeded.
    pub fn expect_success(&mut self) -> &mut Self {
        let exec_result = self.get_last_exec_result();
        if exec_result.is_failure() {
            panic!(
                "Expected successful execution result, but instead got: {:#?}",
                exec_result,
            );
        }
        self
    }

    /// Panics unless the last exec failed.
    pub fn expect_failure(&mut self) -> &mut Self {
        let exec_result = self.get_last_exec_result();
        if exec_result.is_success() {
            panic!(
                "Expected failed execution result, but instead got: {:?}",
                exec_result,
            );
        }
        self
    }

    /// Returns the error of the last exec, if it failed.
    pub fn get_error(&self) -> Option<Error> {
        self.get_last_exec_result().as_error()
    }

    /// Asserts that the last exec failed with `expected_error`.
    pub fn assert_error(&self, expected_error: Error) {
        match self.get_error() {
            Some(error) => assert_eq!(expected_error, error),
            None => panic!("expected error ({:?}) got success", expected_error),
        }
    }

    /// Returns the result of the last exec.
    pub fn get_last_exec_result(&self) -> &ExecutionResult {
        self.exec_results
            .last()
            .expect("Expected to be called after exec()")
    }

    /// Returns every exec result so far.
    pub fn get_exec_results(&self) -> &[ExecutionResult] {
        &self.exec_results
    }

    /// Returns every call a receiving account made back into the splitter.
    pub fn get_reentry_attempts(&self) -> &[ReentryAttempt] {
        &self.reentries
    }

    /// Credited, unwithdrawn balance of `account`.
    pub fn balance_of(&self, account: AccountHash) -> U512 {
        self.read_or_zero(StateKey::Balance(account))
    }

    /// Main purse balance of `account`.
    pub fn purse_balance(&self, account: AccountHash) -> U512 {
        self.read_or_zero(StateKey::MainPurse(account))
    }

    /// Balance of the purse holding every credited but unwithdrawn mote.
    pub fn custody_balance(&self) -> U512 {
        self.read_or_zero(StateKey::CustodyPurse)
    }

    /// Every committed event, in emission order.
    pub fn events(&self) -> &[SplitterEvent] {
        self.global_state.events()
    }

    /// Events emitted by the last exec.
    pub fn last_events(&self) -> &[SplitterEvent] {
        self.get_last_exec_result().effects().events()
    }

    /// Asserts that the custody purse holds exactly the sum of all credited balances.
    pub fn assert_conservation(&self) -> &Self {
        assert_eq!(
            self.custody_balance(),
            self.global_state.total_credited(),
            "custody purse must match the sum of credited balances"
        );
        self
    }

    /// Sum of every purse on the host, the custody purse included. Constant across calls.
    pub fn total_supply(&self) -> U512 {
        self.global_state.total_purses()
    }

    /// Returns the config the builder was created with.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    fn read_or_zero(&self, key: StateKey) -> U512 {
        self.global_state.read(&key).unwrap_or_default()
    }

    fn run(
        &self,
        caller: AccountHash,
        call: &SplitterCall,
        reentries: &mut Vec<ReentryAttempt>,
    ) -> (Result<CallOutcome, Error>, Effects) {
        let mut context = CallContext::new(
            caller,
            &self.global_state,
            self.config.max_call_depth(),
            &self.behaviours,
            reentries,
        );
        let result = context.execute(call);
        let effects = match result {
            Ok(_) => context.effects(),
            Err(_) => Effects::default(),
        };
        (result, effects)
    }
}
