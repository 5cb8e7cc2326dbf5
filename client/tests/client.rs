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

//! Test the client against the ledger file backend.

use rand::Rng as _;
use std::path::PathBuf;

use university_registry_client::*;
use university_registry_test_utils::*;

fn temp_ledger_path() -> PathBuf {
    let name: u64 = rand::thread_rng().gen();
    std::env::temp_dir()
        .join(format!("university-registry-client-{:x}", name))
        .join("ledger.json")
}

#[async_std::test]
async fn ledger_survives_reopening() {
    let _ = env_logger::try_init();
    let path = temp_ledger_path();
    let admin = account_from_string("Admin");
    let professor = account_from_string("Smith");

    let client = Client::deploy_ledger(&path, GenesisConfig { admin }).unwrap();
    let professor_id = submit_ok(
        &client,
        &admin,
        message::AddProfessor {
            name: "Dr. Smith".to_string(),
            owner: professor,
        },
    )
    .await
    .result
    .unwrap();
    drop(client);

    let client = Client::open_ledger(&path).unwrap();
    assert_eq!(client.admin().await.unwrap(), admin);
    assert_eq!(client.account_nonce(&admin).await.unwrap(), 1);
    assert_eq!(client.block_number().await.unwrap(), 1);
    let professor_state = client.get_professor(professor_id).await.unwrap().unwrap();
    assert_eq!(professor_state.name, "Dr. Smith");
    assert_eq!(professor_state.owner, professor);

    // The reopened ledger keeps counting ids.
    let second_id = submit_ok(
        &client,
        &admin,
        message::AddProfessor {
            name: "Dr. Johnson".to_string(),
            owner: professor,
        },
    )
    .await
    .result
    .unwrap();
    assert_eq!(second_id, professor_id + 1);

    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[async_std::test]
async fn deploy_refuses_existing_ledger() {
    let path = temp_ledger_path();
    let genesis_config = GenesisConfig {
        admin: AccountId::random(),
    };
    Client::deploy_ledger(&path, genesis_config.clone()).unwrap();

    match Client::deploy_ledger(&path, genesis_config) {
        Err(Error::LedgerExists(_)) => (),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("existing ledger was overwritten"),
    }

    std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[async_std::test]
async fn stale_transaction_is_rejected() {
    let (client, admin) = new_emulator();
    let extra = TransactionExtra {
        nonce: client.account_nonce(&admin).await.unwrap(),
        genesis_hash: client.genesis_hash(),
    };
    let message = random_add_professor_message(admin);

    let tx = Transaction::new(&admin, message.clone(), extra);
    client.submit_transaction(tx).await.unwrap().await.unwrap();

    let replayed = Transaction::new(&admin, message, extra);
    match client.submit_transaction(replayed).await {
        Err(Error::InvalidTransaction(InvalidTransaction::Stale)) => (),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("replayed transaction was accepted"),
    }
    assert_eq!(client.list_professors().await.unwrap().len(), 1);
}

#[async_std::test]
async fn transaction_for_other_ledger_is_rejected() {
    let (client, admin) = new_emulator();
    let extra = TransactionExtra {
        nonce: 0,
        genesis_hash: Hash([0; 32]),
    };
    let tx = Transaction::new(&admin, random_add_professor_message(admin), extra);

    match client.submit_transaction(tx).await {
        Err(Error::InvalidTransaction(InvalidTransaction::BadGenesis)) => (),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("transaction for another ledger was accepted"),
    }
    assert_eq!(client.account_nonce(&admin).await.unwrap(), 0);
}

#[async_std::test]
async fn included_transaction_reports_hash_and_block() {
    let (client, admin) = new_emulator();
    let extra = TransactionExtra {
        nonce: 0,
        genesis_hash: client.genesis_hash(),
    };
    let tx = Transaction::new(&admin, random_add_professor_message(admin), extra);
    let tx_hash = tx.hash();

    let included = client.submit_transaction(tx).await.unwrap().await.unwrap();
    assert_eq!(included.tx_hash, tx_hash);
    assert_eq!(included.block, 1);
    assert_eq!(included.result, Ok(1));
    assert_eq!(
        included.events,
        vec![
            SystemEvent::TransactionApplied.into(),
            RegistryEvent::ProfessorAdded(1).into()
        ]
    );
}
