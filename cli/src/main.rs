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

use structopt::StructOpt;
use university_registry_cli::CommandLine;

#[async_std::main]
async fn main() {
    pretty_env_logger::init();
    let cmd_line = CommandLine::from_args();
    let result = cmd_line.run().await;
    match result {
        Ok(_) => std::process::exit(0),
        Err(error) => {
            log::error!("{}", error);
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("✗ Operation failed. Run with RUST_LOG=error for details.");
            std::process::exit(1);
        }
    }
}
