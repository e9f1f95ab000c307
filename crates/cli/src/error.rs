// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur when running a jsonrec operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("--fileName has to be specified")]
    MissingFileName,

    #[error("--operation has to be specified")]
    MissingOperation,

    #[error("operation '{0}' not allowed\n  hint: valid operations are: list, add, findById, remove")]
    UnsupportedOperation(String),

    #[error("--{field} is required for {operation}")]
    FieldRequired {
        field: &'static str,
        operation: &'static str,
    },

    #[error("invalid --item payload: {0}\n  hint: expected an object like {{\"id\": \"1\", \"email\": \"a@b.com\", \"age\": 23}}")]
    InvalidItem(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] jsonrec_core::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Broad classification of an [`Error`], for callers that only care about
/// which class of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument is missing or invalid.
    Validation,
    /// The record file does not hold a well-formed record array.
    Parse,
    /// Opening, reading or writing the file or output failed.
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingFileName
            | Error::MissingOperation
            | Error::UnsupportedOperation(_)
            | Error::FieldRequired { .. }
            | Error::InvalidItem(_) => ErrorKind::Validation,
            Error::Store(jsonrec_core::Error::Parse { .. }) => ErrorKind::Parse,
            Error::Store(jsonrec_core::Error::Io { .. })
            | Error::Store(jsonrec_core::Error::Serialize { .. })
            | Error::Output(_) => ErrorKind::Io,
        }
    }
}

/// A specialized Result type for jsonrec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
