// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation configuration.
//!
//! The command line is parsed into loosely-typed [`Arguments`] and validated
//! exactly once into a [`Config`]. Everything past this point works with the
//! typed form:
//! - `file_name`: path to the JSON array file
//! - `request`: the operation (`list`, `add`, `findById`, `remove`) carrying
//!   the id it needs (`findById`, `remove`) or the parsed item (`add`)

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use jsonrec_core::Record;

use crate::error::{Error, Result};

/// The operations the record store supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl Operation {
    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            _ => Err(Error::UnsupportedOperation(s.to_string())),
        }
    }
}

/// Raw, unvalidated invocation arguments.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pub file_name: Option<String>,
    pub operation: Option<String>,
    pub id: Option<String>,
    pub item: Option<String>,
}

/// A validated operation together with the input it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Add(Record),
    FindById(String),
    Remove(String),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Add(_) => Operation::Add,
            Request::FindById(_) => Operation::FindById,
            Request::Remove(_) => Operation::Remove,
        }
    }
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_name: PathBuf,
    pub request: Request,
}

/// Returns the value if present and not blank.
///
/// Whitespace-only values count as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Validates raw arguments.
    ///
    /// File name and operation are checked first, in that order, so a
    /// missing file name is reported even when the operation is also bad.
    /// Operation-specific fields are then checked for the chosen operation.
    pub fn from_arguments(args: &Arguments) -> Result<Self> {
        let file_name = present(args.file_name.as_deref()).ok_or(Error::MissingFileName)?;
        let operation: Operation = present(args.operation.as_deref())
            .ok_or(Error::MissingOperation)?
            .parse()?;

        let required_id = || {
            present(args.id.as_deref())
                .map(String::from)
                .ok_or(Error::FieldRequired {
                    field: "id",
                    operation: operation.as_str(),
                })
        };

        let request = match operation {
            Operation::List => Request::List,
            Operation::Add => {
                let item = present(args.item.as_deref()).ok_or(Error::FieldRequired {
                    field: "item",
                    operation: "add",
                })?;
                Request::Add(Record::from_json(item).map_err(Error::InvalidItem)?)
            }
            Operation::FindById => Request::FindById(required_id()?),
            Operation::Remove => Request::Remove(required_id()?),
        };

        Ok(Config {
            file_name: PathBuf::from(file_name),
            request,
        })
    }

    pub fn operation(&self) -> Operation {
        self.request.operation()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
