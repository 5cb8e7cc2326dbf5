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

//! Getting started with the client by running a small semester.
//!
//! We deploy a ledger in memory, register a professor, a course and a student, enroll the
//! student and let the professor assign a grade.

use university_registry_client::*;

#[async_std::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // The admin is fixed when the ledger is created. Only the admin may add students and
    // professors and create courses.
    let admin = AccountId::random();
    let client = Client::new_emulator(GenesisConfig { admin });
    println!("Ledger {} with admin {}", client.genesis_hash(), admin);

    let professor_account = AccountId::random();
    let student_account = AccountId::random();

    // Submit the message. If successful, returns a future that resolves when the transaction is
    // included in a block.
    print!("Adding professor... ");
    let professor_added = client
        .sign_and_submit_message(
            &admin,
            message::AddProfessor {
                name: "Dr. Smith".to_string(),
                owner: professor_account,
            },
        )
        .await?
        .await?;
    println!("done");

    // The result tells us whether the registry accepted the message. Here it holds the id of the
    // new professor.
    let professor_id = match professor_added.result {
        Ok(professor_id) => professor_id,
        Err(err) => return Err(format!("Failed to add professor: {}", err).into()),
    };
    println!(
        "Professor {} added in block {}",
        professor_id, professor_added.block
    );

    let course_id = client
        .sign_and_submit_message(
            &admin,
            message::CreateCourse {
                name: "Blockchain 101".to_string(),
                professor_id,
            },
        )
        .await?
        .await?
        .result
        .map_err(|err| format!("Failed to create course: {}", err))?;

    let student_id = client
        .sign_and_submit_message(
            &admin,
            message::AddStudent {
                name: "Alice".to_string(),
                age: 21,
                degree: "Engineering".to_string(),
                owner: student_account,
            },
        )
        .await?
        .await?
        .result
        .map_err(|err| format!("Failed to add student: {}", err))?;

    // Anybody may enroll a student.
    client
        .sign_and_submit_message(
            &student_account,
            message::EnrollStudent {
                student_id,
                course_id,
            },
        )
        .await?
        .await?
        .result
        .map_err(|err| format!("Failed to enroll: {}", err))?;
    println!(
        "Student {} enrolled in course {}: {}",
        student_id,
        course_id,
        client.is_enrolled(student_id, course_id).await?
    );

    // Only the professor of the course may assign grades. The admin would get `Unauthorized`.
    let grade_assigned = client
        .sign_and_submit_message(
            &professor_account,
            message::AssignGrade {
                course_id,
                student: student_account,
                grade: 95,
            },
        )
        .await?
        .await?;
    match grade_assigned.result {
        Ok(()) => println!("Grade assigned"),
        Err(err) => println!("Failed to assign grade: {}", err),
    }

    println!(
        "Grade of {} in course {}: {}",
        student_account,
        course_id,
        client.get_grade(course_id, &student_account).await?
    );

    Ok(())
}
