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

//! Basic types used in the University Registry.

pub mod message;
pub mod state;

mod account_id;
pub use account_id::{AccountId, InvalidAccountIdError};

mod hash;
pub use hash::Hash;

mod error;
pub use error::RegistryError;

/// Identifier of a [state::Student].
///
/// Assigned sequentially starting at `1`. The id `0` never refers to an existing student.
pub type StudentId = u64;

/// Identifier of a [state::Professor]. Assigned like [StudentId].
pub type ProfessorId = u64;

/// Identifier of a [state::Course]. Assigned like [StudentId].
pub type CourseId = u64;

/// A grade a professor assigns to a student for a course.
///
/// Valid grades are in the range `0..=MAX_GRADE`.
pub type Grade = u8;

/// Highest grade that can be assigned.
pub const MAX_GRADE: Grade = 100;

/// Age of a student in years.
pub type Age = u32;
