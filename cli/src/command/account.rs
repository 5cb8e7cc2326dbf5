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

//! Define the commands supported by the CLI related to local accounts.

use super::*;
use crate::account_storage;

/// Local account related commands
#[derive(StructOpt, Clone)]
pub enum Command {
    /// Generate a random account identified by `name` and
    /// store it on disk. Fail if there is already an account
    /// with the given `name`.
    Generate(Generate),
    /// List all the local accounts.
    List(List),
    /// Show the address of a local account.
    Show(Show),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Generate(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Show(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
pub struct Generate {
    /// The name that uniquely identifies the account locally.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Generate {
    async fn run(self) -> Result<(), CommandError> {
        let account_id = AccountId::random();
        account_storage::add(self.name, account_storage::AccountData { account_id })?;
        println!("✓ Account generated successfully");
        println!("ⓘ Address: {}", account_id);
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct List {}

#[async_trait::async_trait]
impl CommandT for List {
    async fn run(self) -> Result<(), CommandError> {
        let accounts = account_storage::list()?;
        println!("Accounts ({})\n", accounts.len());
        for (name, data) in accounts {
            println!("  '{}'", name);
            println!("  address: {}\n", data.account_id);
        }
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
pub struct Show {
    /// The name of the local account.
    name: String,
}

#[async_trait::async_trait]
impl CommandT for Show {
    async fn run(self) -> Result<(), CommandError> {
        let account = account_storage::get(&self.name)?;
        println!("{}", account.account_id);
        Ok(())
    }
}
