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

//! Miscellaneous helpers used throughout Registry tests.

use rand::distributions::Alphanumeric;
use rand::Rng;

use university_registry_client::*;

/// Submit a transaction and wait for it to be included in a block.
///
/// Panics if submission errors. The registry operation itself may still have failed; see
/// [TransactionIncluded::result].
pub async fn submit_ok<Message_: Message>(
    client: &Client,
    author: &AccountId,
    message: Message_,
) -> TransactionIncluded<Message_> {
    client
        .sign_and_submit_message(author, message)
        .await
        .unwrap()
        .await
        .unwrap()
}

/// Create an in-memory ledger with a random admin account. Returns the client and the admin.
pub fn new_emulator() -> (Client, AccountId) {
    let admin = random_account();
    let client = Client::new_emulator(GenesisConfig { admin });
    (client, admin)
}

/// Add a professor with a random name owned by a new random account.
///
/// Returns the professor id and the owner account.
pub async fn create_random_professor(
    client: &Client,
    admin: &AccountId,
) -> (ProfessorId, AccountId) {
    let owner = random_account();
    let professor_id = submit_ok(client, admin, random_add_professor_message(owner))
        .await
        .result
        .unwrap();
    (professor_id, owner)
}

/// Add a student with random details owned by a new random account.
///
/// Returns the student id and the owner account.
pub async fn create_random_student(client: &Client, admin: &AccountId) -> (StudentId, AccountId) {
    let owner = random_account();
    let student_id = submit_ok(client, admin, random_add_student_message(owner))
        .await
        .result
        .unwrap();
    (student_id, owner)
}

/// Create a course taught by a new random professor.
///
/// Returns the course id and the account of the course professor.
pub async fn create_random_course(client: &Client, admin: &AccountId) -> (CourseId, AccountId) {
    let (professor_id, professor) = create_random_professor(client, admin).await;
    let course_id = submit_ok(client, admin, random_create_course_message(professor_id))
        .await
        .result
        .unwrap();
    (course_id, professor)
}

/// Create a [message::AddStudent] with random details for the given owner.
pub fn random_add_student_message(owner: AccountId) -> message::AddStudent {
    message::AddStudent {
        name: random_name(),
        age: random_age(),
        degree: random_alnum_string(12),
        owner,
    }
}

/// Create a [message::AddProfessor] with a random name for the given owner.
pub fn random_add_professor_message(owner: AccountId) -> message::AddProfessor {
    message::AddProfessor {
        name: format!("Dr. {}", random_name()),
        owner,
    }
}

/// Create a [message::CreateCourse] with a random name.
pub fn random_create_course_message(professor_id: ProfessorId) -> message::CreateCourse {
    message::CreateCourse {
        name: random_alnum_string(16),
        professor_id,
    }
}

/// Derive an account deterministically from a name. `account_from_string("Alice")` is the same
/// account in every test run.
pub fn account_from_string(value: impl AsRef<str>) -> AccountId {
    let seed = blake3::hash(format!("//{}", value.as_ref()).as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&seed.as_bytes()[..20]);
    AccountId::from_bytes(bytes)
}

pub fn random_account() -> AccountId {
    account_from_string(random_alnum_string(16))
}

pub fn random_name() -> String {
    let size = rand::thread_rng().gen_range(1, 33);
    random_alnum_string(size)
}

pub fn random_age() -> Age {
    rand::thread_rng().gen_range(17, 70)
}

pub fn random_grade() -> Grade {
    rand::thread_rng().gen_range(0, MAX_GRADE + 1)
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .collect::<String>()
}
