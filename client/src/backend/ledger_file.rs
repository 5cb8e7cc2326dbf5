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

//! Provides [LedgerFile] backend that persists the registry ledger as a JSON file.

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use university_registry_runtime::{Runtime, StorageKey, UncheckedTransaction};

use crate::backend;
use crate::interface::*;

/// [backend::Backend] implementation that stores the complete ledger state in a file.
///
/// The file is rewritten after every included transaction. A transaction is only applied to the
/// in-memory state once the new state has been written, so the file and the memory never
/// diverge. The ledger file is not locked: running two processes on the same file at the same
/// time loses transactions.
#[derive(Clone)]
pub struct LedgerFile {
    path: PathBuf,
    genesis_hash: Hash,
    runtime: Arc<Mutex<Runtime>>,
}

impl LedgerFile {
    /// Create a new ledger at `path` and write the genesis state.
    ///
    /// Fails with [Error::LedgerExists] if there already is a file at `path`.
    pub fn create(path: impl Into<PathBuf>, genesis_config: GenesisConfig) -> Result<Self, Error> {
        let path = path.into();
        if path.exists() {
            return Err(Error::LedgerExists(path));
        }
        let runtime = Runtime::new(genesis_config);
        write_runtime(&path, &runtime)?;
        log::info!(
            "Created ledger {} at {}",
            runtime.genesis_hash(),
            path.display()
        );
        Ok(Self::from_runtime(path, runtime))
    }

    /// Load the ledger stored at `path`.
    ///
    /// Fails with [Error::LedgerNotFound] if there is no file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::LedgerNotFound(path));
        }
        let data = fs::read(&path)?;
        let runtime: Runtime = serde_json::from_slice(&data)?;
        log::debug!(
            "Opened ledger {} at block {}",
            runtime.genesis_hash(),
            runtime.block_number()
        );
        Ok(Self::from_runtime(path, runtime))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn from_runtime(path: PathBuf, runtime: Runtime) -> Self {
        LedgerFile {
            path,
            genesis_hash: runtime.genesis_hash(),
            runtime: Arc::new(Mutex::new(runtime)),
        }
    }
}

#[async_trait::async_trait]
impl backend::Backend for LedgerFile {
    async fn submit(
        &self,
        transaction: UncheckedTransaction,
    ) -> Result<BoxFuture<'static, Result<backend::TransactionIncluded, Error>>, Error> {
        let included = {
            let mut runtime = self.runtime.lock();
            let mut next = runtime.clone();
            let included = backend::apply_transaction(&mut next, transaction)?;
            write_runtime(&self.path, &next)?;
            *runtime = next;
            included
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

/// Replace the file at `path` with the JSON serialization of `runtime`.
///
/// Writes to a temporary file next to `path` first and renames it, so readers see either the old
/// or the new state.
fn write_runtime(path: &Path, runtime: &Runtime) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let data = serde_json::to_vec_pretty(runtime)?;
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(&data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
