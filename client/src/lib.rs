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

//! Client for the University Registry.
//!
//! [Client] implements [ClientT] on top of a [backend::Backend]. Use [Client::new_emulator] for
//! an in-memory ledger in tests and development, and [Client::deploy_ledger] or
//! [Client::open_ledger] for a ledger that is persisted in a file.
use parity_scale_codec::Decode;
use std::path::PathBuf;
use std::sync::Arc;

use university_registry_runtime::StorageKey;

mod backend;
mod error;
mod interface;
pub mod message;
mod transaction;

pub use crate::interface::*;

/// Client to interact with the University Registry ledger.
///
/// Implements [ClientT] for interacting with the ledger.
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn backend::Backend + Sync + Send>,
}

impl Client {
    /// Create a new client that emulates the registry ledger in memory. See
    /// [backend::Emulator] for details.
    pub fn new_emulator(genesis_config: GenesisConfig) -> Self {
        Self::new(backend::Emulator::new(genesis_config))
    }

    /// Create a new ledger file at `path` with the given genesis and return a client for it.
    pub fn deploy_ledger(
        path: impl Into<PathBuf>,
        genesis_config: GenesisConfig,
    ) -> Result<Self, Error> {
        let backend = backend::LedgerFile::create(path, genesis_config)?;
        Ok(Self::new(backend))
    }

    /// Create a client for the existing ledger file at `path`.
    pub fn open_ledger(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let backend = backend::LedgerFile::open(path)?;
        Ok(Self::new(backend))
    }

    fn new(backend: impl backend::Backend + Sync + Send + 'static) -> Self {
        Client {
            backend: Arc::new(backend),
        }
    }

    /// Fetch a value from the ledger state and decode it.
    async fn fetch_value<T: Decode + Send>(&self, key: StorageKey) -> Result<Option<T>, Error> {
        let maybe_data = self.backend.fetch(&key).await?;
        match maybe_data {
            Some(data) => Ok(Some(T::decode(&mut &data[..])?)),
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl ClientT for Client {
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let tx_hash = transaction.hash();
        let tx_included_fut = self.backend.submit(transaction.unchecked).await?;
        Ok(Box::pin(async move {
            let tx_included = tx_included_fut.await?;
            let events = tx_included.events;
            let result = Message_::result_from_events(events.clone())
                .map_err(|error| Error::EventExtraction { error, tx_hash })?;
            Ok(TransactionIncluded {
                tx_hash: tx_included.tx_hash,
                block: tx_included.block,
                events,
                result,
            })
        }))
    }

    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error> {
        let nonce = self.account_nonce(author).await?;
        let transaction_extra = TransactionExtra {
            nonce,
            genesis_hash: self.genesis_hash(),
        };
        let transaction = Transaction::new(author, message, transaction_extra);
        self.submit_transaction(transaction).await
    }

    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error> {
        self.fetch_value(StorageKey::AccountNonce(*account_id))
            .await
            .map(Option::unwrap_or_default)
    }

    fn genesis_hash(&self) -> Hash {
        self.backend.get_genesis_hash()
    }

    async fn block_number(&self) -> Result<BlockNumber, Error> {
        self.fetch_value(StorageKey::BlockNumber)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn admin(&self) -> Result<AccountId, Error> {
        self.fetch_value(StorageKey::Admin)
            .await?
            .ok_or_else(|| Error::from("Admin missing from ledger state"))
    }

    async fn get_student(&self, student_id: StudentId) -> Result<Option<state::Student>, Error> {
        self.fetch_value(StorageKey::Student(student_id)).await
    }

    async fn list_students(&self) -> Result<Vec<StudentId>, Error> {
        self.fetch_value(StorageKey::StudentIds)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn get_professor(
        &self,
        professor_id: ProfessorId,
    ) -> Result<Option<state::Professor>, Error> {
        self.fetch_value(StorageKey::Professor(professor_id)).await
    }

    async fn list_professors(&self) -> Result<Vec<ProfessorId>, Error> {
        self.fetch_value(StorageKey::ProfessorIds)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn get_course(&self, course_id: CourseId) -> Result<Option<state::Course>, Error> {
        self.fetch_value(StorageKey::Course(course_id)).await
    }

    async fn list_courses(&self) -> Result<Vec<CourseId>, Error> {
        self.fetch_value(StorageKey::CourseIds)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn is_enrolled(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<bool, Error> {
        self.fetch_value(StorageKey::Enrollment(student_id, course_id))
            .await
            .map(Option::unwrap_or_default)
    }

    async fn get_grade(&self, course_id: CourseId, student: &AccountId) -> Result<Grade, Error> {
        self.fetch_value(StorageKey::Grade(course_id, *student))
            .await
            .map(Option::unwrap_or_default)
    }
}
