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

//! Transaction related types used in the University Registry.
//!
//! Each message is the parameter set of one state changing registry operation. The author of
//! the transaction carrying a message is checked by the access control of that operation.

use crate::{AccountId, Age, CourseId, Grade, ProfessorId, StudentId};
use parity_scale_codec::{Decode, Encode};

/// Add a student. Only the admin may send this.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddStudent {
    pub name: String,
    pub age: Age,
    pub degree: String,
    pub owner: AccountId,
}

/// Add a professor. Only the admin may send this.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AddProfessor {
    pub name: String,
    pub owner: AccountId,
}

/// Create a course taught by an existing professor. Only the admin may send this.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct CreateCourse {
    pub name: String,
    pub professor_id: ProfessorId,
}

/// Overwrite name, age and degree of an existing student. Only the admin may send this.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateStudent {
    pub student_id: StudentId,
    pub name: String,
    pub age: Age,
    pub degree: String,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct EnrollStudent {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct DropCourse {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Assign a grade to the student account for a course. Only the professor of the course may
/// send this.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AssignGrade {
    pub course_id: CourseId,
    pub student: AccountId,
    pub grade: Grade,
}
