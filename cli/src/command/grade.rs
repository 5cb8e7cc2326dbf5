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

//! Define the commands supported by the CLI related to grades.

use super::*;

/// Grade related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    Assign(Assign),
    Show(Show),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Assign(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Assign a grade to a student. The author must be the professor of the course.
pub struct Assign {
    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    /// Local account name or address of the student.
    #[structopt(value_name = "student", parse(try_from_str = lookup_account))]
    student: AccountId,

    /// A grade from 0 to 100.
    #[structopt(parse(try_from_str = parse_grade))]
    grade: Grade,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Assign {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let assign_grade_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::AssignGrade {
                    course_id: self.course_id,
                    student: self.student,
                    grade: self.grade,
                },
            )
            .await?;
        announce_tx("Assigning grade...");

        let grade_assigned = assign_grade_fut.await?;
        transaction_applied_ok(&grade_assigned)?;
        println!(
            "✓ Grade {} assigned to {} in course {}",
            self.grade, self.student, self.course_id
        );
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show the grade of a student in a course. Shows 0 if no grade was assigned.
pub struct Show {
    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    /// Local account name or address of the student.
    #[structopt(value_name = "student", parse(try_from_str = lookup_account))]
    student: AccountId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let grade = client.get_grade(self.course_id, &self.student).await?;
        println!("{}", grade);
        Ok(())
    }
}
