#![no_std]
#![no_main]

#[macro_use]
extern crate alloc;

mod host;

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use casper_contract::{
    contract_api::{runtime, storage, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_splitter::{
    constants::{
        ACCESS_KEY, ARG_ACCOUNT, ARG_AMOUNT, ARG_PURSE, ARG_RECEIVER1, ARG_RECEIVER2,
        BALANCES_KEY, CUSTODY_PURSE_KEY, EVENTS_TOPIC, HASH_KEY, METHOD_BALANCE_OF, METHOD_SPLIT,
        METHOD_WITHDRAW,
    },
    Splitter,
};
use casper_types::{
    account::AccountHash, contract_messages::MessageTopicOperation, contracts::NamedKeys, CLType,
    CLTyped, CLValue, EntityEntryPoint, EntryPointAccess, EntryPointPayment, EntryPointType,
    EntryPoints, Parameter, URef, U512,
};

use host::ContractHost;

/// Takes custody of `amount` from the attached `purse` and splits it between `receiver1` and
/// `receiver2`.
#[no_mangle]
pub extern "C" fn split() {
    let receiver1: AccountHash = runtime::get_named_arg(ARG_RECEIVER1);
    let receiver2: AccountHash = runtime::get_named_arg(ARG_RECEIVER2);
    let amount: U512 = runtime::get_named_arg(ARG_AMOUNT);
    let purse: URef = runtime::get_named_arg(ARG_PURSE);

    ContractHost::new(Some(purse))
        .split(receiver1, receiver2, amount)
        .unwrap_or_revert();
}

/// Pays the caller's credited balance out to the caller's main purse.
#[no_mangle]
pub extern "C" fn withdraw() {
    ContractHost::new(None).withdraw().unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn balance_of() {
    let account: AccountHash = runtime::get_named_arg(ARG_ACCOUNT);
    let balance = ContractHost::new(None)
        .balance_of(account)
        .unwrap_or_revert();
    runtime::ret(CLValue::from_t(balance).unwrap_or_revert());
}

fn entry_points() -> EntryPoints {
    let mut entry_points = EntryPoints::new();

    entry_points.add_entry_point(EntityEntryPoint::new(
        METHOD_SPLIT,
        vec![
            Parameter::new(ARG_RECEIVER1, AccountHash::cl_type()),
            Parameter::new(ARG_RECEIVER2, AccountHash::cl_type()),
            Parameter::new(ARG_AMOUNT, U512::cl_type()),
            Parameter::new(ARG_PURSE, URef::cl_type()),
        ],
        CLType::Unit,
        EntryPointAccess::Public,
        EntryPointType::Called,
        EntryPointPayment::Caller,
    ));

    entry_points.add_entry_point(EntityEntryPoint::new(
        METHOD_WITHDRAW,
        Vec::new(),
        CLType::Unit,
        EntryPointAccess::Public,
        EntryPointType::Called,
        EntryPointPayment::Caller,
    ));

    entry_points.add_entry_point(EntityEntryPoint::new(
        METHOD_BALANCE_OF,
        vec![Parameter::new(ARG_ACCOUNT, AccountHash::cl_type())],
        U512::cl_type(),
        EntryPointAccess::Public,
        EntryPointType::Called,
        EntryPointPayment::Caller,
    ));

    entry_points
}

#[no_mangle]
pub extern "C" fn call() {
    let mut named_keys = NamedKeys::new();

    let custody_purse = system::create_purse();
    named_keys.insert(String::from(CUSTODY_PURSE_KEY), custody_purse.into());

    // New dictionaries land in the installing account's named keys.
    let balances = storage::new_dictionary(BALANCES_KEY).unwrap_or_revert();
    runtime::remove_key(BALANCES_KEY);
    named_keys.insert(String::from(BALANCES_KEY), balances.into());

    let mut message_topics = BTreeMap::new();
    message_topics.insert(String::from(EVENTS_TOPIC), MessageTopicOperation::Add);

    storage::new_contract(
        entry_points(),
        Some(named_keys),
        Some(String::from(HASH_KEY)),
        Some(String::from(ACCESS_KEY)),
        Some(message_topics),
    );
}
