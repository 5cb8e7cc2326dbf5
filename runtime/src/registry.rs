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

//! The registry of students, professors and courses together with enrollments and grades.
//!
//! Every state changing operation first runs its access check (see [guard]), then checks its
//! preconditions and only then writes. An operation that returns an error has not changed the
//! registry.

use codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::convert::TryFrom;

use crate::message;
use crate::state::{Course, Professor, Student};
use crate::{AccountId, CourseId, Grade, ProfessorId, RegistryError, StudentId, MAX_GRADE};

mod guard;

/// All state changing registry operations.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Call {
    AddStudent(message::AddStudent),
    AddProfessor(message::AddProfessor),
    CreateCourse(message::CreateCourse),
    UpdateStudent(message::UpdateStudent),
    EnrollStudent(message::EnrollStudent),
    DropCourse(message::DropCourse),
    AssignGrade(message::AssignGrade),
}

/// Events emitted by successful registry operations.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    StudentAdded(StudentId),
    ProfessorAdded(ProfessorId),
    CourseCreated(CourseId, ProfessorId),
    StudentUpdated(StudentId),
    StudentEnrolled(StudentId, CourseId),
    CourseDropped(StudentId, CourseId),
    GradeAssigned(CourseId, AccountId, Grade),
}

/// # Invariants
///
/// * The entity with id `n` is stored at index `n - 1` of its list.
/// * Every pair in `enrollments` refers to an existing student and course.
/// * Every key of `grades` is an existing course.
/// * `admin` never changes.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Registry {
    admin: AccountId,
    students: Vec<Student>,
    professors: Vec<Professor>,
    courses: Vec<Course>,
    enrollments: BTreeSet<(StudentId, CourseId)>,
    grades: BTreeMap<CourseId, BTreeMap<AccountId, Grade>>,
}

impl Registry {
    pub fn new(admin: AccountId) -> Self {
        Registry {
            admin,
            students: Vec::new(),
            professors: Vec::new(),
            courses: Vec::new(),
            enrollments: BTreeSet::new(),
            grades: BTreeMap::new(),
        }
    }

    /// Run the operation for `call` on behalf of `sender`.
    pub fn dispatch(&mut self, sender: &AccountId, call: Call) -> Result<Event, RegistryError> {
        match call {
            Call::AddStudent(message) => self.add_student(sender, message).map(Event::StudentAdded),
            Call::AddProfessor(message) => self
                .add_professor(sender, message)
                .map(Event::ProfessorAdded),
            Call::CreateCourse(message) => {
                let professor_id = message.professor_id;
                self.create_course(sender, message)
                    .map(|course_id| Event::CourseCreated(course_id, professor_id))
            }
            Call::UpdateStudent(message) => {
                let student_id = message.student_id;
                self.update_student(sender, message)
                    .map(|()| Event::StudentUpdated(student_id))
            }
            Call::EnrollStudent(message::EnrollStudent {
                student_id,
                course_id,
            }) => self
                .enroll_student(student_id, course_id)
                .map(|()| Event::StudentEnrolled(student_id, course_id)),
            Call::DropCourse(message::DropCourse {
                student_id,
                course_id,
            }) => self
                .drop_course(student_id, course_id)
                .map(|()| Event::CourseDropped(student_id, course_id)),
            Call::AssignGrade(message::AssignGrade {
                course_id,
                student,
                grade,
            }) => self
                .assign_grade(sender, course_id, student, grade)
                .map(|()| Event::GradeAssigned(course_id, student, grade)),
        }
    }

    pub fn add_student(
        &mut self,
        sender: &AccountId,
        message: message::AddStudent,
    ) -> Result<StudentId, RegistryError> {
        self.ensure_admin(sender)?;

        let id = next_id(&self.students);
        self.students.push(Student {
            id,
            name: message.name,
            age: message.age,
            degree: message.degree,
            owner: message.owner,
        });
        Ok(id)
    }

    pub fn add_professor(
        &mut self,
        sender: &AccountId,
        message: message::AddProfessor,
    ) -> Result<ProfessorId, RegistryError> {
        self.ensure_admin(sender)?;

        let id = next_id(&self.professors);
        self.professors.push(Professor {
            id,
            name: message.name,
            owner: message.owner,
        });
        Ok(id)
    }

    /// Create a course for an existing professor. The course is graded by the professor's
    /// owner account as it is at the time of creation.
    pub fn create_course(
        &mut self,
        sender: &AccountId,
        message: message::CreateCourse,
    ) -> Result<CourseId, RegistryError> {
        self.ensure_admin(sender)?;
        let professor = self
            .get_professor(message.professor_id)
            .ok_or(RegistryError::InvalidProfessorId)?;

        let course = Course {
            id: next_id(&self.courses),
            name: message.name,
            professor_id: professor.id,
            professor: professor.owner,
        };
        let id = course.id;
        self.courses.push(course);
        Ok(id)
    }

    /// Overwrite name, age and degree of a student. The owner account is kept.
    pub fn update_student(
        &mut self,
        sender: &AccountId,
        message: message::UpdateStudent,
    ) -> Result<(), RegistryError> {
        self.ensure_admin(sender)?;
        let index =
            index_of(message.student_id, self.students.len()).ok_or(RegistryError::InvalidStudentId)?;

        let student = self.students[index]
            .clone()
            .with_details(message.name, message.age, message.degree);
        self.students[index] = student;
        Ok(())
    }

    /// Enroll a student in a course. Anybody may enroll any student.
    pub fn enroll_student(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistryError> {
        if self.get_student(student_id).is_none() {
            return Err(RegistryError::InvalidStudentId);
        }
        if self.get_course(course_id).is_none() {
            return Err(RegistryError::InvalidCourseId);
        }
        if self.is_enrolled(student_id, course_id) {
            return Err(RegistryError::AlreadyEnrolled);
        }

        self.enrollments.insert((student_id, course_id));
        Ok(())
    }

    /// Remove the enrollment of a student in a course. Anybody may drop any enrollment.
    pub fn drop_course(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistryError> {
        if self.enrollments.remove(&(student_id, course_id)) {
            Ok(())
        } else {
            Err(RegistryError::NotEnrolled)
        }
    }

    /// Set the grade of the `student` account for a course. Only the course professor may
    /// assign grades. The student does not need to be enrolled.
    pub fn assign_grade(
        &mut self,
        sender: &AccountId,
        course_id: CourseId,
        student: AccountId,
        grade: Grade,
    ) -> Result<(), RegistryError> {
        self.ensure_course_professor(sender, course_id)?;
        if grade > MAX_GRADE {
            return Err(RegistryError::InvalidGrade);
        }

        self.grades
            .entry(course_id)
            .or_default()
            .insert(student, grade);
        Ok(())
    }

    pub fn admin(&self) -> AccountId {
        self.admin
    }

    pub fn get_student(&self, id: StudentId) -> Option<&Student> {
        lookup(&self.students, id)
    }

    pub fn get_professor(&self, id: ProfessorId) -> Option<&Professor> {
        lookup(&self.professors, id)
    }

    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        lookup(&self.courses, id)
    }

    /// The student with the given id or [Student::default] if there is none.
    pub fn students(&self, id: StudentId) -> Student {
        self.get_student(id).cloned().unwrap_or_default()
    }

    /// The professor with the given id or [Professor::default] if there is none.
    pub fn professors(&self, id: ProfessorId) -> Professor {
        self.get_professor(id).cloned().unwrap_or_default()
    }

    /// The course with the given id or [Course::default] if there is none.
    pub fn courses(&self, id: CourseId) -> Course {
        self.get_course(id).cloned().unwrap_or_default()
    }

    pub fn list_students(&self) -> Vec<StudentId> {
        self.students.iter().map(|student| student.id).collect()
    }

    pub fn list_professors(&self) -> Vec<ProfessorId> {
        self.professors.iter().map(|professor| professor.id).collect()
    }

    pub fn list_courses(&self) -> Vec<CourseId> {
        self.courses.iter().map(|course| course.id).collect()
    }

    /// The id the next added student will get.
    pub fn next_student_id(&self) -> StudentId {
        next_id(&self.students)
    }

    pub fn next_professor_id(&self) -> ProfessorId {
        next_id(&self.professors)
    }

    pub fn next_course_id(&self) -> CourseId {
        next_id(&self.courses)
    }

    pub fn is_enrolled(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.enrollments.contains(&(student_id, course_id))
    }

    /// The grade of `student` in the course or `0` if none was assigned.
    pub fn get_grade(&self, course_id: CourseId, student: &AccountId) -> Grade {
        self.find_grade(course_id, student).unwrap_or(0)
    }

    /// The grade of `student` in the course if one was assigned.
    pub fn find_grade(&self, course_id: CourseId, student: &AccountId) -> Option<Grade> {
        self.grades
            .get(&course_id)
            .and_then(|grades| grades.get(student))
            .copied()
    }
}

/// Position of the entity with id `id` in a list of `len` entities.
fn index_of(id: u64, len: usize) -> Option<usize> {
    let index = usize::try_from(id.checked_sub(1)?).ok()?;
    if index < len {
        Some(index)
    } else {
        None
    }
}

fn lookup<T>(entities: &[T], id: u64) -> Option<&T> {
    index_of(id, entities.len()).map(|index| &entities[index])
}

fn next_id<T>(entities: &[T]) -> u64 {
    entities.len() as u64 + 1
}
