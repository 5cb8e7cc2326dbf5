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

//! Define the commands supported by the CLI related to students.

use super::*;

/// Student related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    Add(Add),
    Update(Update),
    Show(Show),
    List(List),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Add(cmd) => cmd.run().await,
            Command::Update(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Add a student. The author must be the registry admin.
pub struct Add {
    #[structopt(parse(try_from_str = parse_name))]
    name: String,

    #[structopt(parse(try_from_str = parse_age))]
    age: Age,

    #[structopt(parse(try_from_str = parse_name))]
    degree: String,

    /// Local account name or address of the student.
    #[structopt(value_name = "owner", parse(try_from_str = lookup_account))]
    owner: AccountId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Add {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let add_student_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::AddStudent {
                    name: self.name.clone(),
                    age: self.age,
                    degree: self.degree,
                    owner: self.owner,
                },
            )
            .await?;
        announce_tx("Adding student...");

        let student_added = add_student_fut.await?;
        let student_id = transaction_applied_ok(&student_added)?;
        println!("✓ Student {} added with id {}", self.name, student_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Replace name, age and degree of a student. The author must be the registry admin.
pub struct Update {
    #[structopt(parse(try_from_str = parse_id))]
    student_id: StudentId,

    #[structopt(parse(try_from_str = parse_name))]
    name: String,

    #[structopt(parse(try_from_str = parse_age))]
    age: Age,

    #[structopt(parse(try_from_str = parse_name))]
    degree: String,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Update {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let update_student_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::UpdateStudent {
                    student_id: self.student_id,
                    name: self.name,
                    age: self.age,
                    degree: self.degree,
                },
            )
            .await?;
        announce_tx("Updating student...");

        let student_updated = update_student_fut.await?;
        transaction_applied_ok(&student_updated)?;
        println!("✓ Student {} updated", self.student_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show information for a student.
pub struct Show {
    #[structopt(parse(try_from_str = parse_id))]
    student_id: StudentId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let student = client
            .get_student(self.student_id)
            .await?
            .ok_or(CommandError::StudentNotFound {
                student_id: self.student_id,
            })?;

        println!("id: {}", student.id);
        println!("name: {}", student.name);
        println!("age: {}", student.age);
        println!("degree: {}", student.degree);
        println!("address: {}", student.owner);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// List all students in the registry.
pub struct List {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let student_ids = client.list_students().await?;
        println!("STUDENTS ({})", student_ids.len());
        for student_id in student_ids {
            if let Some(student) = client.get_student(student_id).await? {
                println!("{}\t{}\t{}", student.id, student.name, student.degree);
            }
        }
        Ok(())
    }
}
