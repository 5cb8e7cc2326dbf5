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

//! Manages accounts stored in the filesystem,
//! providing ways to store and retrieve them.

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Error as IOError;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

use university_registry_client::AccountId;

/// The data that is stored in the filesystem relative
/// to an account. The account name is used as the key
/// to this value, therefore not included here.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct AccountData {
    pub account_id: AccountId,
}

#[derive(Debug, ThisError)]
pub enum Error {
    /// An account with the given name already exists
    #[error("An account with the name '{0}' already exists")]
    AlreadyExists(String),

    /// No account with the given name exists
    #[error("No account with the name '{0}' exists")]
    NotFound(String),

    /// The platform does not provide a data directory
    #[error("Cannot determine the data directory of the current user")]
    NoDataDir,

    /// Failed to write to the accounts file
    #[error("Failed to write to the accounts file: {0}")]
    FailedWrite(#[from] WritingError),

    /// Failed to read the accounts file
    #[error("Failed to read the accounts file: {0}")]
    FailedRead(#[from] ReadingError),
}

/// Possible errors when writing to the accounts file.
#[derive(Debug, ThisError)]
pub enum WritingError {
    #[error(transparent)]
    IO(IOError),

    #[error(transparent)]
    Serialization(serde_json::Error),
}

/// Possible errors when reading the accounts file.
#[derive(Debug, ThisError)]
pub enum ReadingError {
    #[error(transparent)]
    IO(IOError),

    #[error(transparent)]
    Deserialization(serde_json::Error),
}

/// Add an account to the storage.
///
/// Fails if an account with the given `name` already exists.
/// It can also fail from IO and Serde Json errors.
pub fn add(name: String, data: AccountData) -> Result<(), Error> {
    add_to(&file_path()?, name, data)
}

/// Get an account by its name.
pub fn get(name: &str) -> Result<AccountData, Error> {
    get_from(&file_path()?, name)
}

/// List all the stored accounts.
///
/// It can fail from IO and Serde Json errors.
pub fn list() -> Result<BTreeMap<String, AccountData>, Error> {
    list_from(&file_path()?)
}

/// The directory where the CLI keeps its files. `None` if the platform has no data directory
/// for the current user.
pub fn data_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.data_dir().join("university-registry"))
}

const FILE: &str = "accounts.json";

fn file_path() -> Result<PathBuf, Error> {
    let dir = data_dir().ok_or(Error::NoDataDir)?;
    Ok(dir.join(FILE))
}

fn add_to(path: &Path, name: String, data: AccountData) -> Result<(), Error> {
    let mut accounts = list_from(path)?;
    if accounts.contains_key(&name) {
        return Err(Error::AlreadyExists(name));
    }

    accounts.insert(name, data);
    update(path, accounts)
}

fn get_from(path: &Path, name: &str) -> Result<AccountData, Error> {
    list_from(path)?
        .remove(name)
        .ok_or_else(|| Error::NotFound(name.to_string()))
}

// A missing accounts file holds no accounts.
fn list_from(path: &Path) -> Result<BTreeMap<String, AccountData>, Error> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read(path).map_err(ReadingError::IO)?;
    let accounts = serde_json::from_slice(&content).map_err(ReadingError::Deserialization)?;
    Ok(accounts)
}

fn update(path: &Path, accounts: BTreeMap<String, AccountData>) -> Result<(), Error> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(WritingError::IO)?;
    }
    let new_content =
        serde_json::to_string_pretty(&accounts).map_err(WritingError::Serialization)?;
    std::fs::write(path, new_content.as_bytes()).map_err(WritingError::IO)?;
    Ok(())
}
