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

use parity_scale_codec::Error as CodecError;
use std::path::PathBuf;

use university_registry_runtime::InvalidTransaction;

use crate::message::EventExtractionError;

/// Error that may be returned by any of the [crate::ClientT] methods
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Decoding the received data failed
    #[error("Decoding the received data failed")]
    Codec(#[from] CodecError),

    /// The ledger rejected the transaction before dispatching it
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] InvalidTransaction),

    /// Failed to extract required events for a transaction
    #[error("Failed to extract required events for transaction {tx_hash}")]
    EventExtraction {
        #[source]
        error: EventExtractionError,
        tx_hash: crate::TxHash,
    },

    /// No ledger file exists at the given path
    #[error("No ledger found at {}", .0.display())]
    LedgerNotFound(PathBuf),

    /// Refusing to overwrite an existing ledger file
    #[error("A ledger already exists at {}", .0.display())]
    LedgerExists(PathBuf),

    /// Reading or writing the ledger file failed
    #[error("Failed to access the ledger file")]
    LedgerIo(#[from] std::io::Error),

    /// The ledger file does not contain a valid ledger state
    #[error("Failed to serialize or deserialize the ledger state")]
    LedgerSerialization(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Other(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Error::Other(error.into())
    }
}
