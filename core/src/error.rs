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

use parity_scale_codec::{Decode, Encode};

/// Errors describing failed Registry transactions.
///
/// A transaction that fails with any of these errors has not changed the registry state.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum RegistryError {
    #[error("The transaction author is not authorized to perform this action")]
    Unauthorized,
    #[error("The provided student does not exist")]
    InvalidStudentId,
    #[error("The provided professor does not exist")]
    InvalidProfessorId,
    #[error("The provided course does not exist")]
    InvalidCourseId,
    #[error("The student is already enrolled in the course")]
    AlreadyEnrolled,
    #[error("The student is not enrolled in the course")]
    NotEnrolled,
    #[error("The grade must be between 0 and 100")]
    InvalidGrade,
}

impl From<RegistryError> for &'static str {
    fn from(error: RegistryError) -> &'static str {
        match error {
            RegistryError::Unauthorized => "Unauthorized",
            RegistryError::InvalidStudentId => "Invalid student ID",
            RegistryError::InvalidProfessorId => "Invalid professor ID",
            RegistryError::InvalidCourseId => "Invalid course ID",
            RegistryError::AlreadyEnrolled => "Already enrolled",
            RegistryError::NotEnrolled => "Not enrolled",
            RegistryError::InvalidGrade => "Invalid grade",
        }
    }
}
