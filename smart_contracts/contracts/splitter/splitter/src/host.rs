//! Binds the splitter's providers to the contract runtime.
use alloc::string::String;

use casper_contract::{
    contract_api::{runtime, storage, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_splitter::{
    constants::{BALANCES_KEY, CUSTODY_PURSE_KEY, EVENTS_TOPIC},
    Error, RuntimeProvider, Splitter, SplitterEvent, StorageProvider, SystemProvider,
};
use casper_types::{
    account::AccountHash, bytesrepr::ToBytes, contract_messages::MessagePayload, ApiError,
    URef, U512,
};

/// Runtime context of a single entry point call.
pub struct ContractHost {
    custody_purse: URef,
    balances: URef,
    deposit_purse: Option<URef>,
}

impl ContractHost {
    /// Loads the contract's named keys. `deposit_purse` is the purse the caller attached value
    /// through, if any.
    pub fn new(deposit_purse: Option<URef>) -> Self {
        ContractHost {
            custody_purse: get_uref(CUSTODY_PURSE_KEY),
            balances: get_uref(BALANCES_KEY),
            deposit_purse,
        }
    }
}

fn get_uref(name: &str) -> URef {
    runtime::get_key(name)
        .unwrap_or_revert_with(ApiError::MissingKey)
        .into_uref()
        .unwrap_or_revert_with(ApiError::UnexpectedKeyVariant)
}

fn make_dictionary_item_key(account: &AccountHash) -> String {
    hex::encode(account.as_bytes())
}

impl RuntimeProvider for ContractHost {
    fn get_caller(&self) -> AccountHash {
        runtime::get_caller()
    }

    fn emit_event(&mut self, event: SplitterEvent) -> Result<(), Error> {
        let bytes = event.to_bytes().map_err(|_| Error::EmitEvent)?;
        runtime::emit_message(EVENTS_TOPIC, &MessagePayload::Bytes(bytes.into()))
            .map_err(|_| Error::EmitEvent)
    }
}

impl StorageProvider for ContractHost {
    fn read_balance(&mut self, account: AccountHash) -> Result<Option<U512>, Error> {
        let dictionary_item_key = make_dictionary_item_key(&account);
        storage::dictionary_get(self.balances, &dictionary_item_key).map_err(|_| Error::Storage)
    }

    fn write_balance(&mut self, account: AccountHash, amount: U512) -> Result<(), Error> {
        let dictionary_item_key = make_dictionary_item_key(&account);
        storage::dictionary_put(self.balances, &dictionary_item_key, amount);
        Ok(())
    }
}

impl SystemProvider for ContractHost {
    fn accept_deposit(&mut self, amount: U512) -> Result<(), Error> {
        let source = self.deposit_purse.ok_or(Error::DepositFailed)?;
        system::transfer_from_purse_to_purse(source, self.custody_purse, amount, None)
            .map_err(|_| Error::DepositFailed)
    }

    fn transfer_to_account(&mut self, target: AccountHash, amount: U512) -> Result<(), Error> {
        system::transfer_from_purse_to_account(self.custody_purse, target, amount, None)
            .map(|_| ())
            .map_err(|_| Error::TransferFailed)
    }
}

impl Splitter for ContractHost {}
