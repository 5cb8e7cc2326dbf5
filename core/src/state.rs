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

//! Type definitions for all entities stored in the registry state.
//!
//! Every entity implements [Default]. The default value is what the registry reports for an id
//! that was never assigned: id `0`, empty strings and the zero [AccountId].

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Age, CourseId, ProfessorId, StudentId};

/// # Storage
///
/// Students are stored in a list ordered by [Student::id].
///
/// # Invariants
///
/// * `id` is never `0` for a stored student.
/// * `owner` is immutable.
///
/// # Relevant messages
///
/// * [crate::message::AddStudent]
/// * [crate::message::UpdateStudent]
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: Age,
    pub degree: String,
    /// Account the student is known by. Grades are keyed by this account.
    pub owner: AccountId,
}

impl Student {
    /// Overwrite the mutable fields of the student.
    /// Return the student with the new fields.
    pub fn with_details(mut self, name: String, age: Age, degree: String) -> Self {
        self.name = name;
        self.age = age;
        self.degree = degree;
        self
    }
}

/// # Storage
///
/// Professors are stored in a list ordered by [Professor::id].
///
/// # Invariants
///
/// * A professor is immutable once added.
///
/// # Relevant messages
///
/// * [crate::message::AddProfessor]
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    /// Account allowed to grade the courses of this professor.
    pub owner: AccountId,
}

/// # Storage
///
/// Courses are stored in a list ordered by [Course::id].
///
/// # Invariants
///
/// * `professor_id` refers to an existing [Professor].
/// * `professor` equals the owner of that professor at the time the course was created.
///
/// # Relevant messages
///
/// * [crate::message::CreateCourse]
/// * [crate::message::AssignGrade]
#[derive(Decode, Encode, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub professor_id: ProfessorId,
    /// The only account that may assign grades for this course.
    pub professor: AccountId,
}

/// Next index (nonce) for a transaction of an account.
///
/// The index for an [crate::AccountId] increases whenever a transaction by the account is
/// applied, whether or not the transaction succeeded.
pub type AccountTransactionIndex = u32;
