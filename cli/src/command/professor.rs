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

//! Define the commands supported by the CLI related to professors.

use super::*;

/// Professor related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    Add(Add),
    Show(Show),
    List(List),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Add(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Add a professor. The author must be the registry admin.
pub struct Add {
    #[structopt(parse(try_from_str = parse_name))]
    name: String,

    /// Local account name or address of the professor. This account grades the professor's
    /// courses.
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
        let add_professor_fut = client
            .sign_and_submit_message(
                &self.tx_options.author,
                message::AddProfessor {
                    name: self.name.clone(),
                    owner: self.owner,
                },
            )
            .await?;
        announce_tx("Adding professor...");

        let professor_added = add_professor_fut.await?;
        let professor_id = transaction_applied_ok(&professor_added)?;
        println!("✓ Professor {} added with id {}", self.name, professor_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show information for a professor.
pub struct Show {
    #[structopt(parse(try_from_str = parse_id))]
    professor_id: ProfessorId,

    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let professor = client
            .get_professor(self.professor_id)
            .await?
            .ok_or(CommandError::ProfessorNotFound {
                professor_id: self.professor_id,
            })?;

        println!("id: {}", professor.id);
        println!("name: {}", professor.name);
        println!("address: {}", professor.owner);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// List all professors in the registry.
pub struct List {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        let professor_ids = client.list_professors().await?;
        println!("PROFESSORS ({})", professor_ids.len());
        for professor_id in professor_ids {
            if let Some(professor) = client.get_professor(professor_id).await? {
                println!("{}\t{}", professor.id, professor.name);
            }
        }
        Ok(())
    }
}
