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

//! Tests that run registry operations directly, without transactions.

use rand::Rng;

use university_registry_runtime::registry::Registry;
use university_registry_runtime::*;

struct Fixture {
    registry: Registry,
    admin: AccountId,
    professor: AccountId,
    student: AccountId,
}

/// Registry with professor 1 owned by `professor`, course 1 taught by professor 1 and
/// student 1 owned by `student`.
fn fixture() -> Fixture {
    let admin = AccountId::random();
    let professor = AccountId::random();
    let student = AccountId::random();
    let mut registry = Registry::new(admin);

    registry
        .add_professor(&admin, add_professor("Dr. Smith", professor))
        .unwrap();
    registry
        .create_course(
            &admin,
            message::CreateCourse {
                name: "Blockchain 101".to_string(),
                professor_id: 1,
            },
        )
        .unwrap();
    registry
        .add_student(&admin, add_student("Alice", 21, "Engineering", student))
        .unwrap();

    Fixture {
        registry,
        admin,
        professor,
        student,
    }
}

fn add_student(name: &str, age: Age, degree: &str, owner: AccountId) -> message::AddStudent {
    message::AddStudent {
        name: name.to_string(),
        age,
        degree: degree.to_string(),
        owner,
    }
}

fn add_professor(name: &str, owner: AccountId) -> message::AddProfessor {
    message::AddProfessor {
        name: name.to_string(),
        owner,
    }
}

#[test]
fn student_ids_are_sequential() {
    let admin = AccountId::random();
    let mut registry = Registry::new(admin);

    for expected_id in 1..=20u64 {
        let age = rand::thread_rng().gen_range(17, 70);
        let owner = AccountId::random();
        let name = format!("student-{}", expected_id);
        let id = registry
            .add_student(&admin, add_student(&name, age, "Mathematics", owner))
            .unwrap();
        assert_eq!(id, expected_id);

        let student = registry.get_student(id).unwrap();
        assert_eq!(student.id, id);
        assert_eq!(student.name, name);
        assert_eq!(student.age, age);
        assert_eq!(student.degree, "Mathematics");
        assert_eq!(student.owner, owner);
    }
    assert_eq!(registry.next_student_id(), 21);
}

#[test]
fn professor_ids_are_sequential() {
    let admin = AccountId::random();
    let mut registry = Registry::new(admin);

    let smith = registry
        .add_professor(&admin, add_professor("Dr. Smith", admin))
        .unwrap();
    let johnson = registry
        .add_professor(&admin, add_professor("Dr. Johnson", admin))
        .unwrap();

    assert_eq!((smith, johnson), (1, 2));
    assert_eq!(registry.professors(1).name, "Dr. Smith");
    assert_eq!(registry.professors(2).name, "Dr. Johnson");
    assert_eq!(registry.list_professors(), vec![1, 2]);
}

#[test]
fn admin_operations_reject_other_senders() {
    let Fixture {
        mut registry,
        professor,
        student,
        ..
    } = fixture();
    let before = registry.clone();

    for sender in &[professor, student, AccountId::random()] {
        assert_eq!(
            registry.add_student(sender, add_student("Bob", 22, "Math", *sender)),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(
            registry.add_professor(sender, add_professor("Dr. Johnson", *sender)),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(
            registry.create_course(
                sender,
                message::CreateCourse {
                    name: "Blockchain 101".to_string(),
                    professor_id: 1,
                }
            ),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(
            registry.update_student(
                sender,
                message::UpdateStudent {
                    student_id: 1,
                    name: "Mallory".to_string(),
                    age: 99,
                    degree: "None".to_string(),
                }
            ),
            Err(RegistryError::Unauthorized)
        );
    }

    assert_eq!(registry, before);
}

#[test]
fn create_course_with_unknown_professor() {
    let Fixture {
        mut registry,
        admin,
        ..
    } = fixture();

    for professor_id in &[0, 2, 1000] {
        let result = registry.create_course(
            &admin,
            message::CreateCourse {
                name: "Blockchain 102".to_string(),
                professor_id: *professor_id,
            },
        );
        assert_eq!(result, Err(RegistryError::InvalidProfessorId));
    }
    assert_eq!(registry.list_courses(), vec![1]);
}

#[test]
fn update_student_keeps_owner() {
    let Fixture {
        mut registry,
        admin,
        student,
        ..
    } = fixture();

    registry
        .update_student(
            &admin,
            message::UpdateStudent {
                student_id: 1,
                name: "Alice Smith".to_string(),
                age: 22,
                degree: "Physics".to_string(),
            },
        )
        .unwrap();

    let updated = registry.students(1);
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.age, 22);
    assert_eq!(updated.degree, "Physics");
    assert_eq!(updated.owner, student);
}

#[test]
fn update_unknown_student() {
    let Fixture {
        mut registry,
        admin,
        ..
    } = fixture();

    let result = registry.update_student(
        &admin,
        message::UpdateStudent {
            student_id: 2,
            name: "Bob".to_string(),
            age: 22,
            degree: "Math".to_string(),
        },
    );
    assert_eq!(result, Err(RegistryError::InvalidStudentId));
}

#[test]
fn enroll_and_drop() {
    let Fixture { mut registry, .. } = fixture();
    assert!(!registry.is_enrolled(1, 1));

    registry.enroll_student(1, 1).unwrap();
    assert!(registry.is_enrolled(1, 1));
    assert_eq!(
        registry.enroll_student(1, 1),
        Err(RegistryError::AlreadyEnrolled)
    );

    registry.drop_course(1, 1).unwrap();
    assert!(!registry.is_enrolled(1, 1));
    assert_eq!(registry.drop_course(1, 1), Err(RegistryError::NotEnrolled));

    // Enrolling again after dropping is allowed.
    registry.enroll_student(1, 1).unwrap();
    assert!(registry.is_enrolled(1, 1));
}

#[test]
fn enroll_with_unknown_ids() {
    let Fixture { mut registry, .. } = fixture();
    let next_student = registry.next_student_id();
    let next_course = registry.next_course_id();

    for student_id in &[0, next_student, next_student + 1, 999] {
        assert_eq!(
            registry.enroll_student(*student_id, 1),
            Err(RegistryError::InvalidStudentId)
        );
    }
    for course_id in &[0, next_course, next_course + 1, 999] {
        assert_eq!(
            registry.enroll_student(1, *course_id),
            Err(RegistryError::InvalidCourseId)
        );
    }
    // The student is checked before the course.
    assert_eq!(
        registry.enroll_student(0, 0),
        Err(RegistryError::InvalidStudentId)
    );
}

#[test]
fn professor_assigns_grade() {
    let Fixture {
        mut registry,
        professor,
        student,
        ..
    } = fixture();
    assert_eq!(registry.get_grade(1, &student), 0);

    registry.assign_grade(&professor, 1, student, 85).unwrap();
    assert_eq!(registry.get_grade(1, &student), 85);

    registry.assign_grade(&professor, 1, student, 100).unwrap();
    assert_eq!(registry.get_grade(1, &student), 100);

    registry.assign_grade(&professor, 1, student, 0).unwrap();
    assert_eq!(registry.find_grade(1, &student), Some(0));
}

#[test]
fn only_course_professor_assigns_grade() {
    let Fixture {
        mut registry,
        admin,
        student,
        ..
    } = fixture();

    for sender in &[admin, student, AccountId::random()] {
        assert_eq!(
            registry.assign_grade(sender, 1, student, 90),
            Err(RegistryError::Unauthorized)
        );
    }
    assert_eq!(registry.find_grade(1, &student), None);
}

#[test]
fn grade_out_of_range() {
    let Fixture {
        mut registry,
        professor,
        student,
        ..
    } = fixture();

    registry.assign_grade(&professor, 1, student, 70).unwrap();
    for grade in &[101u8, 200, u8::MAX] {
        assert_eq!(
            registry.assign_grade(&professor, 1, student, *grade),
            Err(RegistryError::InvalidGrade)
        );
    }
    assert_eq!(registry.get_grade(1, &student), 70);
}

#[test]
fn grade_for_missing_course_is_unauthorized() {
    let Fixture {
        mut registry,
        professor,
        student,
        ..
    } = fixture();

    assert_eq!(
        registry.assign_grade(&professor, 2, student, 50),
        Err(RegistryError::Unauthorized)
    );
}

#[test]
fn course_professor_is_fixed_at_creation() {
    let Fixture {
        mut registry,
        admin,
        professor,
        student,
    } = fixture();

    // A second professor with a different account gets their own course.
    let other = AccountId::random();
    registry
        .add_professor(&admin, add_professor("Dr. Johnson", other))
        .unwrap();
    registry
        .create_course(
            &admin,
            message::CreateCourse {
                name: "Cryptography".to_string(),
                professor_id: 2,
            },
        )
        .unwrap();

    assert_eq!(
        registry.assign_grade(&professor, 2, student, 60),
        Err(RegistryError::Unauthorized)
    );
    registry.assign_grade(&other, 2, student, 60).unwrap();
    assert_eq!(registry.get_grade(2, &student), 60);
    assert_eq!(registry.get_grade(1, &student), 0);
}
