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
/// High-level runtime tests that treat the runtime as a black box.
///
/// The tests in this module concern student registration and updates.
use university_registry_client::*;
use university_registry_test_utils::*;

#[async_std::test]
async fn add_student() {
    let (client, admin) = new_emulator();
    let owner = random_account();
    let add_student_message = random_add_student_message(owner);

    let tx_included = submit_ok(&client, &admin, add_student_message.clone()).await;
    assert_eq!(tx_included.result, Ok(1));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::StudentAdded(1).into()));

    let student = client.get_student(1).await.unwrap().unwrap();
    assert_eq!(student.id, 1);
    assert_eq!(student.name, add_student_message.name);
    assert_eq!(student.age, add_student_message.age);
    assert_eq!(student.degree, add_student_message.degree);
    assert_eq!(student.owner, owner);
    assert_eq!(client.list_students().await.unwrap(), vec![1]);
}

#[async_std::test]
async fn student_ids_follow_call_order() {
    let (client, admin) = new_emulator();

    for expected_id in 1..=5 {
        let (student_id, _) = create_random_student(&client, &admin).await;
        assert_eq!(student_id, expected_id);
    }
    assert_eq!(client.list_students().await.unwrap(), vec![1, 2, 3, 4, 5]);
}

#[async_std::test]
async fn add_student_not_admin() {
    let (client, admin) = new_emulator();
    let (_, existing_owner) = create_random_student(&client, &admin).await;
    let bad_actor = random_account();

    for author in &[bad_actor, existing_owner] {
        let tx_included = submit_ok(&client, author, random_add_student_message(*author)).await;
        assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
        assert_eq!(
            tx_included.events,
            vec![SystemEvent::TransactionFailed(RegistryError::Unauthorized).into()]
        );
    }
    assert_eq!(client.list_students().await.unwrap().len(), 1);
}

#[async_std::test]
async fn update_student() {
    let (client, admin) = new_emulator();
    let (student_id, owner) = create_random_student(&client, &admin).await;

    let tx_included = submit_ok(
        &client,
        &admin,
        message::UpdateStudent {
            student_id,
            name: "Alice Smith".to_string(),
            age: 30,
            degree: "Physics".to_string(),
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::StudentUpdated(student_id).into()));

    let student = client.get_student(student_id).await.unwrap().unwrap();
    assert_eq!(student.name, "Alice Smith");
    assert_eq!(student.age, 30);
    assert_eq!(student.degree, "Physics");
    assert_eq!(student.owner, owner);
}

#[async_std::test]
async fn update_student_failures() {
    let (client, admin) = new_emulator();
    let (student_id, owner) = create_random_student(&client, &admin).await;
    let update = |student_id| message::UpdateStudent {
        student_id,
        name: random_name(),
        age: random_age(),
        degree: "Mathematics".to_string(),
    };

    let not_admin = submit_ok(&client, &owner, update(student_id)).await;
    assert_eq!(not_admin.result, Err(RegistryError::Unauthorized));

    let unknown_student = submit_ok(&client, &admin, update(student_id + 1)).await;
    assert_eq!(unknown_student.result, Err(RegistryError::InvalidStudentId));

    let student = client.get_student(student_id).await.unwrap().unwrap();
    assert_ne!(student.degree, "Mathematics");
}

#[async_std::test]
async fn unknown_student_is_none() {
    let (client, admin) = new_emulator();
    create_random_student(&client, &admin).await;

    assert!(client.get_student(0).await.unwrap().is_none());
    assert!(client.get_student(2).await.unwrap().is_none());
}
