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

//! Define trait for client backends and provide the in-memory and the ledger file
//! implementation.
use futures::future::BoxFuture;

use university_registry_runtime::{hash_of, Runtime, StorageKey, UncheckedTransaction};

use crate::interface::*;

mod emulator;
mod ledger_file;

pub use emulator::Emulator;
pub use ledger_file::LedgerFile;

/// Indicator that a transaction has been included in a block and has run in the runtime.
///
/// Obtained after a transaction has been submitted and processed.
pub struct TransactionIncluded {
    pub tx_hash: TxHash,
    /// The number of the block the transaction is included in.
    pub block: BlockNumber,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
}

/// Backend for talking to the ledger.
///
/// The interface is low-level and agnostic of the registry messages. Implementations must apply
/// transactions one at a time.
#[async_trait::async_trait]
pub trait Backend {
    /// Submit a transaction to the ledger.
    ///
    /// The outer future fails if the transaction is invalid. The inner future resolves once the
    /// transaction has been applied and included in a block.
    async fn submit(
        &self,
        transaction: UncheckedTransaction,
    ) -> Result<BoxFuture<'static, Result<TransactionIncluded, Error>>, Error>;

    /// Fetch a SCALE encoded value from the ledger state.
    async fn fetch(&self, key: &StorageKey) -> Result<Option<Vec<u8>>, Error>;

    /// Get the genesis hash of the ledger. This must be obtained on backend creation.
    fn get_genesis_hash(&self) -> Hash;
}

/// Apply `transaction` to `runtime` in a new block.
///
/// Callers must hold exclusive access to `runtime` for the whole call.
fn apply_transaction(
    runtime: &mut Runtime,
    transaction: UncheckedTransaction,
) -> Result<TransactionIncluded, Error> {
    let tx_hash = hash_of(&transaction);
    let author = transaction.author;
    let events = runtime.apply_transaction(transaction).map_err(|error| {
        log::warn!("Rejected transaction {} from {}: {}", tx_hash, author, error);
        Error::from(error)
    })?;
    Ok(TransactionIncluded {
        tx_hash,
        block: runtime.block_number(),
        events,
    })
}
