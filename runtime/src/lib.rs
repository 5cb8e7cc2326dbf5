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

//! The University Registry runtime.
//!
//! [Runtime] is the ledger state machine. It validates transactions against the genesis hash
//! and the author's nonce and dispatches their [Call] to the [registry::Registry]. All state
//! changes go through [Runtime::apply_transaction], so callers that share a runtime only need
//! to serialize calls to that one method.

use codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use university_registry_core::*;

pub mod registry;
pub use registry::Call;

mod storage;
pub use storage::StorageKey;

/// An index to a block.
///
/// Every applied transaction is included in its own block. The genesis block has number `0`.
pub type BlockNumber = u32;

/// Hash `value` with blake3 over its SCALE encoding.
pub fn hash_of<T: Encode>(value: &T) -> Hash {
    Hash(*blake3::hash(&value.encode()).as_bytes())
}

/// Parameters a new registry is created with.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct GenesisConfig {
    /// The only account that may add students and professors and create courses. It cannot be
    /// changed after genesis.
    pub admin: AccountId,
}

/// A transaction attributed to `author` that has not been validated yet.
///
/// Transactions are not signed. The author is taken as given and only compared with the
/// accounts stored in the registry.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UncheckedTransaction {
    pub author: AccountId,
    /// Must equal the author's current [Runtime::account_nonce].
    pub nonce: state::AccountTransactionIndex,
    /// Genesis hash of the registry this transaction is meant for.
    pub genesis_hash: Hash,
    pub call: Call,
}

/// Reasons for rejecting a transaction before it is dispatched.
///
/// A rejected transaction has no effect on the state. In particular it does not use up the
/// author's nonce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidTransaction {
    #[error("The transaction was created for a different registry")]
    BadGenesis,
    #[error("The transaction nonce has already been used")]
    Stale,
    #[error("The transaction nonce is ahead of the account nonce")]
    Future,
}

/// Events emitted while applying transactions.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    System(SystemEvent),
    Registry(registry::Event),
}

impl From<registry::Event> for Event {
    fn from(event: registry::Event) -> Self {
        Event::Registry(event)
    }
}

impl From<SystemEvent> for Event {
    fn from(event: SystemEvent) -> Self {
        Event::System(event)
    }
}

/// Dispatch outcome of a transaction. Exactly one is emitted for every applied transaction.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum SystemEvent {
    TransactionApplied,
    TransactionFailed(RegistryError),
}

/// The complete ledger state.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Runtime {
    genesis_hash: Hash,
    block_number: BlockNumber,
    nonces: BTreeMap<AccountId, state::AccountTransactionIndex>,
    registry: registry::Registry,
}

impl Runtime {
    pub fn new(genesis_config: GenesisConfig) -> Self {
        Runtime {
            genesis_hash: hash_of(&genesis_config),
            block_number: 0,
            nonces: BTreeMap::new(),
            registry: registry::Registry::new(genesis_config.admin),
        }
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    /// Number of the block that includes the most recently applied transaction.
    pub fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    pub fn account_nonce(&self, account_id: &AccountId) -> state::AccountTransactionIndex {
        self.nonces.get(account_id).copied().unwrap_or(0)
    }

    pub fn registry(&self) -> &registry::Registry {
        &self.registry
    }

    /// Check that `transaction` may be applied to the current state.
    pub fn validate_transaction(
        &self,
        transaction: &UncheckedTransaction,
    ) -> Result<(), InvalidTransaction> {
        if transaction.genesis_hash != self.genesis_hash {
            return Err(InvalidTransaction::BadGenesis);
        }
        let nonce = self.account_nonce(&transaction.author);
        if transaction.nonce < nonce {
            return Err(InvalidTransaction::Stale);
        }
        if transaction.nonce > nonce {
            return Err(InvalidTransaction::Future);
        }
        Ok(())
    }

    /// Validate and apply a transaction in a new block and return the events it emitted.
    ///
    /// If the transaction is valid the author's nonce is incremented even if the call fails. A
    /// failed call is reported with [SystemEvent::TransactionFailed] and leaves the registry
    /// unchanged.
    pub fn apply_transaction(
        &mut self,
        transaction: UncheckedTransaction,
    ) -> Result<Vec<Event>, InvalidTransaction> {
        self.validate_transaction(&transaction)?;

        let UncheckedTransaction { author, call, .. } = transaction;
        *self.nonces.entry(author).or_insert(0) += 1;
        self.block_number += 1;

        let events = match self.registry.dispatch(&author, call) {
            Ok(event) => {
                log::debug!("block {}: {:?}", self.block_number, event);
                vec![SystemEvent::TransactionApplied.into(), event.into()]
            }
            Err(error) => {
                log::warn!(
                    "block {}: transaction from {} failed: {}",
                    self.block_number,
                    author,
                    error
                );
                vec![SystemEvent::TransactionFailed(error).into()]
            }
        };
        Ok(events)
    }

    /// Look up the SCALE encoded value stored under `key`.
    ///
    /// Returns `None` for entities that do not exist and for enrollments and grades that have
    /// not been set.
    pub fn storage_get(&self, key: &StorageKey) -> Option<Vec<u8>> {
        storage::get(self, key)
    }
}
