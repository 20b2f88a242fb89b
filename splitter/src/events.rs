//! Events emitted by successful splitter calls.
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use casper_types::{
    account::AccountHash,
    bytesrepr::{self, FromBytes, ToBytes, U8_SERIALIZED_LENGTH},
    CLType, CLTyped, U512,
};

/// Tag representing variants of [`SplitterEvent`] for purposes of serialization.
#[derive(FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum SplitterEventTag {
    /// SplitPerformed tag.
    SplitPerformed = 0,
    /// FundsWithdrawn tag.
    FundsWithdrawn,
}

/// A deposit was divided between two receivers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitPerformed {
    /// The depositor, credited with the remainder.
    pub sender: AccountHash,
    /// First receiver.
    pub receiver1: AccountHash,
    /// Second receiver.
    pub receiver2: AccountHash,
    /// Amount credited to each receiver.
    pub amount_each_received: U512,
    /// Amount credited back to the sender.
    pub remainder: U512,
}

/// An account drained its credited balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundsWithdrawn {
    /// The account which withdrew.
    pub withdrawer: AccountHash,
    /// Amount paid out.
    pub amount: U512,
}

/// An entry in the splitter's event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitterEvent {
    /// See [`SplitPerformed`].
    SplitPerformed(SplitPerformed),
    /// See [`FundsWithdrawn`].
    FundsWithdrawn(FundsWithdrawn),
}

impl SplitterEvent {
    /// Gets the tag from self.
    pub fn tag(&self) -> SplitterEventTag {
        match self {
            SplitterEvent::SplitPerformed(_) => SplitterEventTag::SplitPerformed,
            SplitterEvent::FundsWithdrawn(_) => SplitterEventTag::FundsWithdrawn,
        }
    }
}

impl From<SplitPerformed> for SplitterEvent {
    fn from(event: SplitPerformed) -> Self {
        SplitterEvent::SplitPerformed(event)
    }
}

impl From<FundsWithdrawn> for SplitterEvent {
    fn from(event: FundsWithdrawn) -> Self {
        SplitterEvent::FundsWithdrawn(event)
    }
}

impl Display for SplitterEvent {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            SplitterEvent::SplitPerformed(event) => write!(
                formatter,
                "split performed: {} -> ({}, {}), {} each, remainder {}",
                event.sender,
                event.receiver1,
                event.receiver2,
                event.amount_each_received,
                event.remainder
            ),
            SplitterEvent::FundsWithdrawn(event) => write!(
                formatter,
                "funds withdrawn: {} by {}",
                event.amount, event.withdrawer
            ),
        }
    }
}

impl ToBytes for SplitPerformed {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut buffer = bytesrepr::allocate_buffer(self)?;
        buffer.append(&mut self.sender.to_bytes()?);
        buffer.append(&mut self.receiver1.to_bytes()?);
        buffer.append(&mut self.receiver2.to_bytes()?);
        buffer.append(&mut self.amount_each_received.to_bytes()?);
        buffer.append(&mut self.remainder.to_bytes()?);
        Ok(buffer)
    }

    fn serialized_length(&self) -> usize {
        self.sender.serialized_length()
            + self.receiver1.serialized_length()
            + self.receiver2.serialized_length()
            + self.amount_each_received.serialized_length()
            + self.remainder.serialized_length()
    }
}

impl FromBytes for SplitPerformed {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (sender, rem) = AccountHash::from_bytes(bytes)?;
        let (receiver1, rem) = AccountHash::from_bytes(rem)?;
        let (receiver2, rem) = AccountHash::from_bytes(rem)?;
        let (amount_each_received, rem) = U512::from_bytes(rem)?;
        let (remainder, rem) = U512::from_bytes(rem)?;
        Ok((
            SplitPerformed {
                sender,
                receiver1,
                receiver2,
                amount_each_received,
                remainder,
            },
            rem,
        ))
    }
}

impl ToBytes for FundsWithdrawn {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut buffer = bytesrepr::allocate_buffer(self)?;
        buffer.append(&mut self.withdrawer.to_bytes()?);
        buffer.append(&mut self.amount.to_bytes()?);
        Ok(buffer)
    }

    fn serialized_length(&self) -> usize {
        self.withdrawer.serialized_length() + self.amount.serialized_length()
    }
}

impl FromBytes for FundsWithdrawn {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (withdrawer, rem) = AccountHash::from_bytes(bytes)?;
        let (amount, rem) = U512::from_bytes(rem)?;
        Ok((FundsWithdrawn { withdrawer, amount }, rem))
    }
}

impl ToBytes for SplitterEvent {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        result.push(self.tag() as u8);
        match self {
            SplitterEvent::SplitPerformed(event) => result.append(&mut event.to_bytes()?),
            SplitterEvent::FundsWithdrawn(event) => result.append(&mut event.to_bytes()?),
        }
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        U8_SERIALIZED_LENGTH
            + match self {
                SplitterEvent::SplitPerformed(event) => event.serialized_length(),
                SplitterEvent::FundsWithdrawn(event) => event.serialized_length(),
            }
    }
}

impl FromBytes for SplitterEvent {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (tag, remainder): (u8, &[u8]) = FromBytes::from_bytes(bytes)?;
        let tag = SplitterEventTag::from_u8(tag).ok_or(bytesrepr::Error::Formatting)?;
        match tag {
            SplitterEventTag::SplitPerformed => {
                let (event, remainder) = SplitPerformed::from_bytes(remainder)?;
                Ok((SplitterEvent::SplitPerformed(event), remainder))
            }
            SplitterEventTag::FundsWithdrawn => {
                let (event, remainder) = FundsWithdrawn::from_bytes(remainder)?;
                Ok((SplitterEvent::FundsWithdrawn(event), remainder))
            }
        }
    }
}

impl CLTyped for SplitterEvent {
    fn cl_type() -> CLType {
        CLType::Any
    }
}
