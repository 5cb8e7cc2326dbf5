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

//! Keyed access to the SCALE encoded ledger state.
//!
//! This is the read interface backends expose to clients. The decoded type of each value is
//! documented on the key.

use codec::{Decode, Encode};

use crate::{AccountId, CourseId, ProfessorId, Runtime, StudentId};

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    /// [AccountId]
    Admin,
    /// [crate::BlockNumber]
    BlockNumber,
    /// [crate::state::AccountTransactionIndex]. Absent for accounts that never sent a
    /// transaction.
    AccountNonce(AccountId),
    /// `Vec<StudentId>`
    StudentIds,
    /// `Vec<ProfessorId>`
    ProfessorIds,
    /// `Vec<CourseId>`
    CourseIds,
    /// [crate::state::Student]
    Student(StudentId),
    /// [crate::state::Professor]
    Professor(ProfessorId),
    /// [crate::state::Course]
    Course(CourseId),
    /// `bool`. Only present if the student is enrolled.
    Enrollment(StudentId, CourseId),
    /// [crate::Grade]. Only present if a grade was assigned.
    Grade(CourseId, AccountId),
}

pub(crate) fn get(runtime: &Runtime, key: &StorageKey) -> Option<Vec<u8>> {
    let registry = runtime.registry();
    match key {
        StorageKey::Admin => Some(registry.admin().encode()),
        StorageKey::BlockNumber => Some(runtime.block_number().encode()),
        StorageKey::AccountNonce(account_id) => runtime
            .nonces
            .get(account_id)
            .map(|nonce| nonce.encode()),
        StorageKey::StudentIds => Some(registry.list_students().encode()),
        StorageKey::ProfessorIds => Some(registry.list_professors().encode()),
        StorageKey::CourseIds => Some(registry.list_courses().encode()),
        StorageKey::Student(id) => registry.get_student(*id).map(Encode::encode),
        StorageKey::Professor(id) => registry.get_professor(*id).map(Encode::encode),
        StorageKey::Course(id) => registry.get_course(*id).map(Encode::encode),
        StorageKey::Enrollment(student_id, course_id) => {
            if registry.is_enrolled(*student_id, *course_id) {
                Some(true.encode())
            } else {
                None
            }
        }
        StorageKey::Grade(course_id, student) => registry
            .find_grade(*course_id, student)
            .map(|grade| grade.encode()),
    }
}
