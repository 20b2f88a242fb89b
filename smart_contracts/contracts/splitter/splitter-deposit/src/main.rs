#![no_std]
#![no_main]

use casper_contract::{
    contract_api::{account, runtime, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_splitter::constants::{
    ARG_AMOUNT, ARG_PURSE, ARG_RECEIVER1, ARG_RECEIVER2, HASH_KEY, METHOD_SPLIT,
};
use casper_types::{
    account::AccountHash, contracts::ContractHash, runtime_args, ApiError, U512,
};

/// Moves `amount` out of the caller's main purse into a fresh purse and hands it to the
/// splitter installed under the caller's named keys.
#[no_mangle]
pub extern "C" fn call() {
    let receiver1: AccountHash = runtime::get_named_arg(ARG_RECEIVER1);
    let receiver2: AccountHash = runtime::get_named_arg(ARG_RECEIVER2);
    let amount: U512 = runtime::get_named_arg(ARG_AMOUNT);

    let contract_hash = runtime::get_key(HASH_KEY)
        .unwrap_or_revert_with(ApiError::MissingKey)
        .into_hash_addr()
        .map(ContractHash::new)
        .unwrap_or_revert_with(ApiError::UnexpectedKeyVariant);

    let purse = system::create_purse();
    system::transfer_from_purse_to_purse(account::get_main_purse(), purse, amount, None)
        .unwrap_or_revert();

    runtime::call_contract::<()>(
        contract_hash,
        METHOD_SPLIT,
        runtime_args! {
            ARG_RECEIVER1 => receiver1,
            ARG_RECEIVER2 => receiver2,
            ARG_AMOUNT => amount,
            ARG_PURSE => purse,
        },
    );
}
