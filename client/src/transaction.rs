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

//! Provides [Transaction] and [TransactionExtra].
use core::marker::PhantomData;

use university_registry_core::state::AccountTransactionIndex;
use university_registry_runtime::{hash_of, AccountId, Hash, UncheckedTransaction};

use crate::{message::Message, TxHash};

#[derive(Clone, Debug)]
/// Transaction that can be submitted to the ledger.
///
/// A transaction includes
/// * the author
/// * the registry message
/// * extra data like the gensis hash and account nonce
///
/// The transaction type is generic over the message parameter which must implement [Message].
///
/// A transaction can be created with [Transaction::new]. The necessary transaction data must be
/// obtained from the client with [crate::ClientT::account_nonce] and
/// [crate::ClientT::genesis_hash].
pub struct Transaction<Message_: Message> {
    _phantom_data: PhantomData<Message_>,
    pub(crate) unchecked: UncheckedTransaction,
}

impl<Message_: Message> Transaction<Message_> {
    /// Create a transaction for the given message authored by `author`.
    pub fn new(author: &AccountId, message: Message_, transaction_extra: TransactionExtra) -> Self {
        let unchecked = UncheckedTransaction {
            author: *author,
            nonce: transaction_extra.nonce,
            genesis_hash: transaction_extra.genesis_hash,
            call: message.into_runtime_call(),
        };
        Transaction {
            _phantom_data: PhantomData,
            unchecked,
        }
    }

    pub fn author(&self) -> &AccountId {
        &self.unchecked.author
    }

    pub fn hash(&self) -> TxHash {
        hash_of(&self.unchecked)
    }
}

#[derive(Copy, Clone, Debug)]
/// The data that is required from the ledger state to create a valid transaction.
pub struct TransactionExtra {
    /// The nonce of the account that is the transaction author.
    pub nonce: AccountTransactionIndex,
    pub genesis_hash: Hash,
}
