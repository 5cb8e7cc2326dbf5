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

//! Define the command line parser and interface.

#![allow(clippy::large_enum_variant)]

use lazy_static::lazy_static;
use std::path::PathBuf;
use structopt::StructOpt;
use thiserror::Error as ThisError;
use university_registry_client::*;

pub mod account_storage;

mod command;
use command::{account, course, enrollment, grade, other, professor, student};

/// The type that captures the command line.
#[derive(StructOpt, Clone)]
#[structopt(max_term_width = 80)]
pub struct CommandLine {
    #[structopt(subcommand)]
    pub command: Command,
}

impl CommandLine {
    pub async fn run(self) -> Result<(), CommandError> {
        self.command.run().await
    }
}

/// Ledger-related command-line options
#[derive(StructOpt, Clone, Debug)]
pub struct LedgerOptions {
    /// File that stores the registry ledger
    #[structopt(
        long,
        env = "UNIREG_LEDGER",
        default_value = &DEFAULT_LEDGER,
        parse(from_os_str),
    )]
    pub ledger: PathBuf,
}

impl LedgerOptions {
    pub fn client(&self) -> Result<Client, Error> {
        Client::open_ledger(&self.ledger)
    }
}

/// Transaction-related command-line options
#[derive(StructOpt, Clone, Debug)]
pub struct TxOptions {
    /// The local account name or the address that authors transactions.
    #[structopt(
        long,
        env = "UNIREG_AUTHOR",
        value_name = "account",
        parse(try_from_str = lookup_account)
    )]
    pub author: AccountId,
}

lazy_static! {
    static ref DEFAULT_LEDGER: String = account_storage::data_dir()
        .map(|dir| dir.join("ledger.json"))
        .unwrap_or_else(|| PathBuf::from("ledger.json"))
        .to_string_lossy()
        .into_owned();
}

/// Resolve a `0x` prefixed address or the name of a local account to an [AccountId].
fn lookup_account(name_or_address: &str) -> Result<AccountId, String> {
    if let Ok(account_id) = name_or_address.parse::<AccountId>() {
        return Ok(account_id);
    }
    account_storage::get(name_or_address)
        .map(|account| account.account_id)
        .map_err(|e| format!("{}", e))
}

/// The supported [CommandLine] commands.
/// The commands are grouped by domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    Account(account::Command),
    Student(student::Command),
    Professor(professor::Command),
    Course(course::Command),
    Enrollment(enrollment::Command),
    Grade(grade::Command),

    #[structopt(flatten)]
    Other(other::Command),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Account(cmd) => cmd.run().await,
            Command::Student(cmd) => cmd.run().await,
            Command::Professor(cmd) => cmd.run().await,
            Command::Course(cmd) => cmd.run().await,
            Command::Enrollment(cmd) => cmd.run().await,
            Command::Grade(cmd) => cmd.run().await,
            Command::Other(cmd) => cmd.run().await,
        }
    }
}

/// The trait that every command must implement.
#[async_trait::async_trait]
pub trait CommandT {
    async fn run(self) -> Result<(), CommandError>;
}

/// Error returned by [CommandT::run].
///
/// Implements [From] for client errors and [account_storage] errors.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("client error")]
    ClientError(#[from] Error),

    #[error("transaction {tx_hash} in block {block} failed: {error}")]
    FailedTransaction {
        #[source]
        error: RegistryError,
        tx_hash: TxHash,
        block: BlockNumber,
    },

    #[error("cannot find student {student_id}")]
    StudentNotFound { student_id: StudentId },

    #[error("cannot find professor {professor_id}")]
    ProfessorNotFound { professor_id: ProfessorId },

    #[error("cannot find course {course_id}")]
    CourseNotFound { course_id: CourseId },

    #[error(transparent)]
    AccountStorageError(#[from] account_storage::Error),
}

/// Parse `args` as if they were passed to the binary.
#[cfg(test)]
fn parse_command_line(args: &[&str]) -> Result<CommandLine, structopt::clap::Error> {
    let mut argv = vec!["university-registry"];
    argv.extend_from_slice(args);
    CommandLine::from_iter_safe(argv)
}
