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

/// Runtime tests implemented with the emulator client.
///
/// The tests in this module concern account nonces and the ledger admin.
use university_registry_client::*;
use university_registry_test_utils::*;

#[async_std::test]
async fn admin_is_genesis_account() {
    let (client, admin) = new_emulator();
    assert_eq!(client.admin().await.unwrap(), admin);
}

#[async_std::test]
async fn genesis_hash_depends_on_admin() {
    let (client, _) = new_emulator();
    let (other_client, _) = new_emulator();
    assert_ne!(client.genesis_hash(), other_client.genesis_hash());
}

#[async_std::test]
async fn nonce_counts_transactions() {
    let (client, admin) = new_emulator();
    let author = random_account();
    assert_eq!(client.account_nonce(&author).await.unwrap(), 0);

    // Failed registry operations use up a nonce as well.
    let tx_included = submit_ok(&client, &author, random_add_professor_message(author)).await;
    assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
    assert_eq!(client.account_nonce(&author).await.unwrap(), 1);

    create_random_professor(&client, &admin).await;
    create_random_professor(&client, &admin).await;
    assert_eq!(client.account_nonce(&admin).await.unwrap(), 2);
    assert_eq!(client.account_nonce(&author).await.unwrap(), 1);
}
