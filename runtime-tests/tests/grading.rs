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
/// The tests in this module concern grading.
use university_registry_client::*;
use university_registry_test_utils::*;

#[async_std::test]
async fn professor_assigns_grade() {
    let (client, admin) = new_emulator();
    let (course_id, professor) = create_random_course(&client, &admin).await;
    let student = random_account();
    let grade = random_grade();

    let tx_included = submit_ok(
        &client,
        &professor,
        message::AssignGrade {
            course_id,
            student,
            grade,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert!(tx_included
        .events
        .contains(&RegistryEvent::GradeAssigned(course_id, student, grade).into()));
    assert_eq!(client.get_grade(course_id, &student).await.unwrap(), grade);
}

#[async_std::test]
async fn grade_defaults_to_zero() {
    let (client, admin) = new_emulator();
    let (course_id, _) = create_random_course(&client, &admin).await;

    let grade = client
        .get_grade(course_id, &random_account())
        .await
        .unwrap();
    assert_eq!(grade, 0);
    // Also for courses that do not exist.
    let grade = client
        .get_grade(course_id + 1, &random_account())
        .await
        .unwrap();
    assert_eq!(grade, 0);
}

#[async_std::test]
async fn only_course_professor_assigns_grade() {
    let (client, admin) = new_emulator();
    let (course_id, _) = create_random_course(&client, &admin).await;
    let (_, other_professor) = create_random_course(&client, &admin).await;
    let student = random_account();

    for author in &[admin, other_professor, student] {
        let tx_included = submit_ok(
            &client,
            author,
            message::AssignGrade {
                course_id,
                student,
                grade: 100,
            },
        )
        .await;
        assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
    }
    assert_eq!(client.get_grade(course_id, &student).await.unwrap(), 0);
}

#[async_std::test]
async fn grade_for_unknown_course() {
    let (client, admin) = new_emulator();
    let (course_id, professor) = create_random_course(&client, &admin).await;

    let tx_included = submit_ok(
        &client,
        &professor,
        message::AssignGrade {
            course_id: course_id + 1,
            student: random_account(),
            grade: 50,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
}

#[async_std::test]
async fn grade_out_of_range() {
    let (client, admin) = new_emulator();
    let (course_id, professor) = create_random_course(&client, &admin).await;
    let student = random_account();

    let tx_included = submit_ok(
        &client,
        &professor,
        message::AssignGrade {
            course_id,
            student,
            grade: MAX_GRADE + 1,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::InvalidGrade));
    assert_eq!(client.get_grade(course_id, &student).await.unwrap(), 0);
}

#[async_std::test]
async fn regrade_overwrites() {
    let (client, admin) = new_emulator();
    let (course_id, professor) = create_random_course(&client, &admin).await;
    let student = random_account();

    for grade in &[40, 75] {
        let tx_included = submit_ok(
            &client,
            &professor,
            message::AssignGrade {
                course_id,
                student,
                grade: *grade,
            },
        )
        .await;
        assert_eq!(tx_included.result, Ok(()));
    }
    assert_eq!(client.get_grade(course_id, &student).await.unwrap(), 75);
}
