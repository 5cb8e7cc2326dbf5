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

//! Define the commands supported by the CLI related to course enrollment.

use super::*;

/// Enrollment related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    Enroll(Enroll),
    Drop(DropCourse),
    Check(Check),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Enroll(cmd) => cmd.run().await,
            Command::Drop(cmd) => cmd.run().await,
            Command::Check(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Enroll a student in a course. Any account may enroll any student.
pub struct Enroll {
    #[structopt(parse(try_from_str = parse_id))]
    student_id: StudentId,

    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Enroll {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let enroll_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::EnrollStudent {
                    student_id: self.student_id,
                    course_id: self.course_id,
                },
            )
            .await?;
        announce_tx("Enrolling student...");

        let enrolled = enroll_fut.await?;
        transaction_applied_ok(&enrolled)?;
        println!(
            "✓ Student {} is now enrolled in course {}",
            self.student_id, self.course_id
        );
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Remove a student from a course.
pub struct DropCourse {
    #[structopt(parse(try_from_str = parse_id))]
    student_id: StudentId,

    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for DropCourse {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let drop_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::DropCourse {
                    student_id: self.student_id,
                    course_id: self.course_id,
                },
            )
            .await?;
        announce_tx("Dropping course...");

        let dropped = drop_fut.await?;
        transaction_applied_ok(&dropped)?;
        println!(
            "✓ Student {} is no longer enrolled in course {}",
            self.student_id, self.course_id
        );
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Check whether a student is enrolled in a course.
pub struct Check {
    #[structopt(parse(try_from_str = parse_id))]
    student_id: StudentId,

    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Check {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let enrolled = client.is_enrolled(self.student_id, self.course_id).await?;
        println!("{}", enrolled);
        Ok(())
    }
}
