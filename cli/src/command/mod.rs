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

//! Define the commands supported by the CLI.

use crate::{lookup_account, CommandError, CommandT, LedgerOptions, TxOptions};
use structopt::StructOpt;
use university_registry_client::*;

pub mod account;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod other;
pub mod professor;
pub mod student;

/// Names of students, professors and courses. Surrounding whitespace is removed and the
/// remainder must not be empty.
fn parse_name(data: &str) -> Result<String, String> {
    let name = data.trim();
    if name.is_empty() {
        Err("name must not be empty".to_string())
    } else {
        Ok(name.to_string())
    }
}

fn parse_age(data: &str) -> Result<Age, String> {
    match data.parse::<Age>() {
        Ok(0) => Err("age must be positive".to_string()),
        Ok(age) => Ok(age),
        Err(err) => Err(format!("invalid age: {}", err)),
    }
}

/// Student, professor and course ids. Ids start at 1.
fn parse_id(data: &str) -> Result<u64, String> {
    match data.parse::<u64>() {
        Ok(0) => Err("ids start at 1".to_string()),
        Ok(id) => Ok(id),
        Err(err) => Err(format!("invalid id: {}", err)),
    }
}

fn parse_grade(data: &str) -> Result<Grade, String> {
    let grade = data
        .parse::<u32>()
        .map_err(|err| format!("invalid grade: {}", err))?;
    if grade > u32::from(MAX_GRADE) {
        return Err(format!("grade must be between 0 and {}", MAX_GRADE));
    }
    Ok(grade as Grade)
}

fn announce_tx(msg: &str) {
    println!("{}", msg);
    println!("⏳ Waiting for the transaction to be included...");
}

/// Return the output of the transaction or [CommandError::FailedTransaction] if the registry
/// rejected it.
fn transaction_applied_ok<Message_, T>(
    tx_included: &TransactionIncluded<Message_>,
) -> Result<T, CommandError>
where
    Message_: Message<Output = T>,
    T: Copy + Send + 'static,
{
    match tx_included.result {
        Ok(value) => Ok(value),
        Err(error) => Err(CommandError::FailedTransaction {
            error,
            tx_hash: tx_included.tx_hash,
            block: tx_included.block,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(parse_name("  Dr. Smith "), Ok("Dr. Smith".to_string()));
        assert!(parse_name("").is_err());
        assert!(parse_name(" \t ").is_err());
    }

    #[test]
    fn ages_are_positive() {
        assert_eq!(parse_age("21"), Ok(21));
        assert!(parse_age("0").is_err());
        assert!(parse_age("-3").is_err());
        assert!(parse_age("twenty").is_err());
    }

    #[test]
    fn ids_are_positive() {
        assert_eq!(parse_id("1"), Ok(1));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-1").is_err());
    }

    #[test]
    fn grades_are_bounded() {
        assert_eq!(parse_grade("0"), Ok(0));
        assert_eq!(parse_grade("100"), Ok(100));
        assert!(parse_grade("101").is_err());
        assert!(parse_grade("300").is_err());
        assert!(parse_grade("-5").is_err());
    }

    #[test]
    fn failed_transaction_is_error() {
        let tx_included = TransactionIncluded::<message::EnrollStudent> {
            tx_hash: Hash([3; 32]),
            block: 4,
            events: vec![SystemEvent::TransactionFailed(RegistryError::AlreadyEnrolled).into()],
            result: Err(RegistryError::AlreadyEnrolled),
        };
        match transaction_applied_ok(&tx_included) {
            Err(CommandError::FailedTransaction { error, block, .. }) => {
                assert_eq!(error, RegistryError::AlreadyEnrolled);
                assert_eq!(block, 4);
            }
            _ => panic!("failed transaction was reported as success"),
        }
    }
}
