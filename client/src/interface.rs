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

//! Provide an abstract trait for the registry client and the necessary types.
//!
//! The [ClientT] trait defines methods to submit transactions for all registry messages as well
//! as methods to read the ledger state.
use futures::future::BoxFuture;

pub use university_registry_core::*;

pub use university_registry_runtime::{
    hash_of, registry::Event as RegistryEvent, BlockNumber, Event, GenesisConfig,
    InvalidTransaction, SystemEvent,
};

pub use crate::error::Error;
pub use crate::message::{EventExtractionError, Message};
pub use crate::transaction::{Transaction, TransactionExtra};

/// The hash of a transaction. Uniquely identifies a transaction.
#[doc(inline)]
pub type TxHash = Hash;

/// Result of a transaction being included in a block.
///
/// Returned after submitting an transaction to the ledger.
#[derive(Clone, Debug)]
pub struct TransactionIncluded<Message_: Message> {
    pub tx_hash: TxHash,
    /// The number of the block the transaction is included in.
    pub block: BlockNumber,
    /// Events emitted by this transaction
    pub events: Vec<Event>,
    /// The result of the registry message.
    ///
    /// See [Message::result_from_events].
    pub result: Result<Message_::Output, RegistryError>,
}

/// Return type for the second stage of a transaction submission.
pub type Response<T, Error> = BoxFuture<'static, Result<T, Error>>;

/// Trait for ledger clients sending transactions and looking up state.
#[async_trait::async_trait]
pub trait ClientT {
    /// Submit a transaction.
    ///
    /// ```no_run
    /// # use university_registry_client::*;
    /// # async fn example<M: Message>(client: Client, tx: Transaction<M>) -> Result<(), Error> {
    ///
    /// // Submit the transaction to the ledger.
    /// //
    /// // This call fails if the transaction is invalid, for example because its nonce has already
    /// // been used.
    /// let tx_included_fut = client.submit_transaction(tx).await?;
    ///
    /// // We can now wait for the transaction to be included in a block.
    /// //
    /// // This will not error if the registry operation failed. See
    /// // TransactionIncluded::result for that.
    /// let tx_included = tx_included_fut.await?;
    ///
    /// Ok(())
    /// # }
    /// ```
    async fn submit_transaction<Message_: Message>(
        &self,
        transaction: Transaction<Message_>,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Submit a ledger message as a transaction authored by `author`.
    ///
    /// Same as [ClientT::submit_transaction] but takes care of getting the nonce and the genesis
    /// hash for the transaction.
    async fn sign_and_submit_message<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<Response<TransactionIncluded<Message_>, Error>, Error>;

    /// Fetch the nonce for the given account from the ledger state
    async fn account_nonce(
        &self,
        account_id: &AccountId,
    ) -> Result<state::AccountTransactionIndex, Error>;

    /// Return the gensis hash of the ledger we are communicating with.
    fn genesis_hash(&self) -> Hash;

    /// Number of the latest block.
    async fn block_number(&self) -> Result<BlockNumber, Error>;

    async fn admin(&self) -> Result<AccountId, Error>;

    async fn get_student(&self, student_id: StudentId) -> Result<Option<state::Student>, Error>;

    async fn list_students(&self) -> Result<Vec<StudentId>, Error>;

    async fn get_professor(
        &self,
        professor_id: ProfessorId,
    ) -> Result<Option<state::Professor>, Error>;

    async fn list_professors(&self) -> Result<Vec<ProfessorId>, Error>;

    async fn get_course(&self, course_id: CourseId) -> Result<Option<state::Course>, Error>;

    async fn list_courses(&self) -> Result<Vec<CourseId>, Error>;

    async fn is_enrolled(&self, student_id: StudentId, course_id: CourseId)
        -> Result<bool, Error>;

    /// The grade of `student` in the course or `0` if none has been assigned.
    async fn get_grade(&self, course_id: CourseId, student: &AccountId) -> Result<Grade, Error>;
}
