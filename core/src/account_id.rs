// University Registry
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! `AccountId` identifies the author of a transaction and the owner of registry entities.
//!
//! The registry never authenticates an account. Access control compares raw account ids, so
//! an `AccountId` is the principal every guarded operation is checked against.

use parity_scale_codec::{Decode, Encode};
use std::convert::{From, Into, TryFrom};

/// Number of bytes in an [AccountId].
pub const ACCOUNT_ID_LEN: usize = 20;

/// A 20 byte account address.
///
/// Displayed as `0x` prefixed lower-case hex. Parsing accepts the hex form with or without the
/// prefix and in any case.
///
/// ```rust
/// # use university_registry_core::AccountId;
/// let account: AccountId = "0x00000000000000000000000000000000000000ff".parse().unwrap();
/// assert_eq!(account.to_string(), "0x00000000000000000000000000000000000000ff");
/// assert!("0xff".parse::<AccountId>().is_err());
/// ```
#[derive(
    Encode, Decode, Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId([u8; ACCOUNT_ID_LEN]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// Generate a random account id.
    #[cfg(feature = "rand")]
    pub fn random() -> Self {
        Self(rand::random())
    }

    fn from_hex(input: &str) -> Result<Self, InvalidAccountIdError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        if digits.len() != ACCOUNT_ID_LEN * 2 {
            return Err(InvalidAccountIdError("must be 20 bytes of hex"));
        }
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| InvalidAccountIdError("must only include hex digits"))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ACCOUNT_ID_LEN]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl Into<String> for AccountId {
    fn into(self) -> String {
        self.to_string()
    }
}

impl TryFrom<String> for AccountId {
    type Error = InvalidAccountIdError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_hex(&input)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = InvalidAccountIdError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::from_hex(input)
    }
}

impl std::str::FromStr for AccountId {
    type Err = InvalidAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Error type when parsing an [AccountId] failed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("InvalidAccountIdError({0})")]
pub struct InvalidAccountIdError(&'static str);

impl InvalidAccountIdError {
    /// Error description
    pub fn what(&self) -> &'static str {
        self.0
    }
}
