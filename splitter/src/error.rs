//! Home of the splitter's [`enum@Error`] type.
use core::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

use casper_types::ApiError;

/// Errors which can occur while executing the splitter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum Error {
    // ===== User errors =====
    /// `split` was called without any value attached.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(1, Error::InvalidAmount as u8);
    /// ```
    InvalidAmount = 1,
    /// `split` was called with a null receiver in either slot.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(2, Error::InvalidRecipient as u8);
    /// ```
    InvalidRecipient = 2,
    /// `withdraw` was called by an account with nothing credited.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(3, Error::NoBalance as u8);
    /// ```
    NoBalance = 3,
    // ===== Host errors =====
    /// The outgoing transfer of a withdrawal did not complete.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(4, Error::TransferFailed as u8);
    /// ```
    TransferFailed = 4,
    /// The value attached to a split could not be moved into custody.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(5, Error::DepositFailed as u8);
    /// ```
    DepositFailed = 5,
    /// Crediting a balance would overflow.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(6, Error::ArithmeticOverflow as u8);
    /// ```
    ArithmeticOverflow = 6,
    /// Failed to read from or write to the balance table.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(7, Error::Storage as u8);
    /// ```
    Storage = 7,
    /// Failed to emit a splitter event.
    /// ```
    /// # use casper_splitter::Error;
    /// assert_eq!(8, Error::EmitEvent as u8);
    /// ```
    EmitEvent = 8,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidAmount => formatter.write_str("Split amount must be greater than zero"),
            Error::InvalidRecipient => formatter.write_str("Invalid recipient"),
            Error::NoBalance => formatter.write_str("No balance to withdraw"),
            Error::TransferFailed => formatter.write_str("Outgoing transfer failed"),
            Error::DepositFailed => formatter.write_str("Failed to take custody of deposit"),
            Error::ArithmeticOverflow => formatter.write_str("Arithmetic overflow"),
            Error::Storage => formatter.write_str("Failed to access balance storage"),
            Error::EmitEvent => formatter.write_str("Failed to emit event"),
        }
    }
}

impl TryFrom<u8> for Error {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let error = match value {
            v if v == Error::InvalidAmount as u8 => Error::InvalidAmount,
            v if v == Error::InvalidRecipient as u8 => Error::InvalidRecipient,
            v if v == Error::NoBalance as u8 => Error::NoBalance,
            v if v == Error::TransferFailed as u8 => Error::TransferFailed,
            v if v == Error::DepositFailed as u8 => Error::DepositFailed,
            v if v == Error::ArithmeticOverflow as u8 => Error::ArithmeticOverflow,
            v if v == Error::Storage as u8 => Error::Storage,
            v if v == Error::EmitEvent as u8 => Error::EmitEvent,
            _ => return Err(()),
        };
        Ok(error)
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::User(error as u16)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
