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

//! Define the commands supported by the CLI that
//! are not related to any specific domain.

use super::*;

/// Other commands, not related to any specific domain.
#[derive(StructOpt, Clone)]
pub enum Command {
    Deploy(Deploy),
    GenesisHash(ShowGenesisHash),
    Admin(ShowAdmin),
}

#[async_trait::async_trait]
impl CommandT for Command {
    async fn run(self) -> Result<(), CommandError> {
        match self {
            Command::Deploy(cmd) => cmd.run().await,
            Command::GenesisHash(cmd) => cmd.run().await,
            Command::Admin(cmd) => cmd.run().await,
        }
    }
}

#[derive(StructOpt, Clone)]
/// Create a new registry ledger. The author becomes the registry admin.
pub struct Deploy {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,

    #[structopt(flatten)]
    tx_options: TxOptions,
}

#[async_trait::async_trait]
impl CommandT for Deploy {
    async fn run(self) -> Result<(), CommandError> {
        let admin = self.tx_options.author;
        let client = Client::deploy_ledger(&self.ledger_options.ledger, GenesisConfig { admin })?;
        println!("✓ Registry deployed to {}", self.ledger_options.ledger.display());
        println!("ⓘ Admin: {}", admin);
        println!("ⓘ Genesis hash: {}", client.genesis_hash());
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show the genesis hash of the ledger
pub struct ShowGenesisHash {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for ShowGenesisHash {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        println!("Genesis hash: {}", client.genesis_hash());
        Ok(())
    }
}

#[derive(StructOpt, Clone)]
/// Show the address of the registry admin
pub struct ShowAdmin {
    #[structopt(flatten)]
    ledger_options: LedgerOptions,
}

#[async_trait::async_trait]
impl CommandT for ShowAdmin {
    async fn run(self) -> Result<(), CommandError> {
        let client = self.ledger_options.client()?;
        println!("{}", client.admin().await?);
        Ok(())
    }
}
