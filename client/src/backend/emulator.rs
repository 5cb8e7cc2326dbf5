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

//! Provides [Emulator] backend to run the registry ledger in memory.

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::sync::Arc;

use university_registry_runtime::{Runtime, StorageKey, UncheckedTransaction};

use crate::backend;
use crate::interface::*;

/// [backend::Backend] implementation that keeps the ledger state in memory.
///
/// Every [backend::Backend::submit] call creates a new block that only contains the submitted
/// transaction. Clones share the same ledger state.
#[derive(Clone)]
pub struct Emulator {
    genesis_hash: Hash,
    runtime: Arc<Mutex<Runtime>>,
}

impl Emulator {
    pub fn new(genesis_config: GenesisConfig) -> Self {
        let runtime = Runtime::new(genesis_config);
        Emulator {
            genesis_hash: runtime.genesis_hash(),
            runtime: Arc::new(Mutex::new(runtime)),
        }
    }
}

#[async_trait::async_trait]
impl backend::Backend for Emulator {
    async fn submit(
        &self,
        transaction: UncheckedTransaction,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let included = {
            let mut runtime = self.runtime.lock();
            backend::apply_transaction(&mut runtime, transaction)?
        };
        Ok(Box::pin(futures::future::ready(Ok(included))))
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.runtime.lock().storage_get(key))
    }

    fn get_genesis_hash(&self) -> Hash {
        self.genesis_hash
    }
}
