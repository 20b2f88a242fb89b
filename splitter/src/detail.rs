use casper_types::{
    account::{AccountHash, ACCOUNT_HASH_LENGTH},
    U512,
};

use crate::{Error, StorageProvider};

/// The identity used by callers to leave a receiver slot empty.
pub const NULL_ACCOUNT: AccountHash = AccountHash::new([0; ACCOUNT_HASH_LENGTH]);

/// How a deposit is divided.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SplitAmounts {
    /// Credited to each receiver.
    pub share: U512,
    /// Credited back to the depositor.
    pub remainder: U512,
}

/// Divides `amount` into two equal shares and the residual left over by truncation.
pub fn split_amounts(amount: U512) -> Result<SplitAmounts, Error> {
    if amount.is_zero() {
        return Err(Error::InvalidAmount);
    }
    let two = U512::from(2u64);
    let share = amount / two;
    let remainder = share
        .checked_mul(two)
        .and_then(|paired| amount.checked_sub(paired))
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(SplitAmounts { share, remainder })
}

/// Returns `true` if `account` may be named as a receiver.
pub fn is_valid_recipient(account: &AccountHash) -> bool {
    *account != NULL_ACCOUNT
}

/// Adds `amount` to the credited balance of `account`.
pub(crate) fn credit<P: StorageProvider + ?Sized>(
    provider: &mut P,
    account: AccountHash,
    amount: U512,
) -> Result<(), Error> {
    let balance = provider.read_balance(account)?.unwrap_or_default();
    let new_balance = balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    provider.write_balance(account, new_balance)
}
