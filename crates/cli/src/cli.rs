// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use crate::config::Arguments;

#[derive(Parser, Debug)]
#[command(name = "jsonrec")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage a list of user records stored as a JSON array in a single file")]
#[command(after_help = "\
Examples:
  jsonrec --fileName users.json --operation list
  jsonrec --fileName users.json --operation add --item '{\"id\": \"1\", \"email\": \"email@test.com\", \"age\": 23}'
  jsonrec --fileName users.json --operation findById --id 1
  jsonrec --fileName users.json --operation remove --id 1")]
pub struct Cli {
    /// Path to the JSON array file, e.g. users.json
    #[arg(long = "fileName", value_name = "path")]
    pub file_name: Option<String>,

    /// One of: list, add, findById, remove
    #[arg(long, value_name = "name")]
    pub operation: Option<String>,

    /// Record id, required by findById and remove
    #[arg(long)]
    pub id: Option<String>,

    /// Record to add, as a JSON object with id, email and age
    #[arg(long, value_name = "json")]
    pub item: Option<String>,

    /// Log store activity to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Raw arguments for [`crate::Config::from_arguments`].
    ///
    /// Nothing is required at the clap level so that missing values are
    /// reported by the dispatcher's own validation.
    pub fn arguments(&self) -> Arguments {
        Arguments {
            file_name: self.file_name.clone(),
            operation: self.operation.clone(),
            id: self.id.clone(),
            item: self.item.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
