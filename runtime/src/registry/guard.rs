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

//! Access checks for privileged registry operations.
//!
//! The checks only read the registry and compare account ids.

use super::Registry;
use crate::state::Course;
use crate::{AccountId, CourseId, RegistryError};

impl Registry {
    /// Fails with [RegistryError::Unauthorized] unless `sender` is the admin.
    pub fn ensure_admin(&self, sender: &AccountId) -> Result<(), RegistryError> {
        if *sender == self.admin {
            Ok(())
        } else {
            log::debug!("{} is not the registry admin", sender);
            Err(RegistryError::Unauthorized)
        }
    }

    /// Fails with [RegistryError::Unauthorized] unless the course exists and `sender` is its
    /// professor. The admin has no special rights here.
    pub fn ensure_course_professor(
        &self,
        sender: &AccountId,
        course_id: CourseId,
    ) -> Result<&Course, RegistryError> {
        match self.get_course(course_id) {
            Some(course) if course.professor == *sender => Ok(course),
            _ => {
                log::debug!("{} is not the professor of course {}", sender, course_id);
                Err(RegistryError::Unauthorized)
            }
        }
    }
}
