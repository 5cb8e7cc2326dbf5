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

//! Define the commands supported by the CLI related to courses.

use super::*;

/// Course related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    Create(Create),
    Show(Show),
    List(List),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Create(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Create a course taught by a professor. The author must be the registry admin.
pub struct Create {
    #[structopt(parse(try_from_str = parse_name))]
    name: String,

    #[structopt(parse(try_from_str = parse_id))]
    professor_id: ProfessorId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Create {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let create_course_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::CreateCourse {
                    name: self.name.clone(),
                    professor_id: self.professor_id,
                },
            )
            .await?;
        announce_tx("Creating course...");

        let course_created = create_course_fut.await?;
        let course_id = transaction_applied_ok(&course_created)?;
        println!("✓ Course {} created with id {}", self.name, course_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show information for a course.
pub struct Show {
    #[structopt(parse(try_from_str = parse_id))]
    course_id: CourseId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let course = client
            .get_course(self.course_id)
            .await?
            .ok_or(CommandError::CourseNotFound {
                course_id: self.course_id,
            })?;

        println!("id: {}", course.id);
        println!("name: {}", course.name);
        println!("professor id: {}", course.professor_id);
        println!("professor address: {}", course.professor);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// List all courses in the registry.
pub struct List {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let course_ids = client.list_courses().await?;
        println!("COURSES ({})", course_ids.len());
        for course_id in course_ids {
            if let Some(course) = client.get_course(course_id).await? {
                println!("{}\t{}\t{}", course.id, course.name, course.professor_id);
            }
        }
        Ok(())
    }
}
