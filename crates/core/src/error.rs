// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jsonrec-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in record store operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed record file {}: {source}\n  hint: the file must hold a JSON array of {{id, email, age}} objects", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize records for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &std::path::Path, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn serialize(path: &std::path::Path, source: serde_json::Error) -> Self {
        Error::Serialize {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A specialized Result type for jsonrec-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
