// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jsonrec - a command-line record store backed by a single JSON file.
//!
//! The file holds one JSON array of `{id, email, age}` records. Four
//! operations work against it: `list`, `add`, `findById` and `remove`.
//!
//! # Main Components
//!
//! - [`Config`] - Validated invocation (file plus a [`Request`])
//! - [`run`] - Dispatches a [`Config`] to its operation
//! - [`Error`] - Error types, classified by [`ErrorKind`]
//!
//! Storage itself lives in `jsonrec-core`.
//!
//! ```rust,ignore
//! use jsonrec::{perform, Arguments};
//!
//! let args = Arguments {
//!     file_name: Some("users.json".into()),
//!     operation: Some("list".into()),
//!     ..Arguments::default()
//! };
//! perform(&args, &mut std::io::stdout())?;
//! ```

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use config::{Arguments, Config, Operation, Request};
pub use error::{Error, ErrorKind, Result};
pub use jsonrec_core::{Record, RecordStore};

use std::io::Write;

/// Validates raw arguments and runs the requested operation.
pub fn perform(args: &Arguments, out: &mut dyn Write) -> Result<()> {
    let config = Config::from_arguments(args)?;
    run(&config, out)
}

/// Execute a validated operation, writing its result to `out`.
///
/// Each operation opens, uses and closes the record file itself.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    let store = RecordStore::new(&config.file_name);
    tracing::debug!(
        operation = %config.operation(),
        file = %config.file_name.display(),
        "dispatching"
    );

    match &config.request {
        Request::List => commands::list::run(&store, out),
        Request::Add(item) => commands::add::run(&store, item, out),
        Request::FindById(id) => commands::find::run(&store, id, out),
        Request::Remove(id) => commands::remove::run(&store, id, out),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
