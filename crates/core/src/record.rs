// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The record type and the JSON array encoding of a record collection.

use serde::{Deserialize, Serialize};

/// A single user entry stored in the collection.
///
/// `id` is user-supplied; uniqueness is only enforced when adding.
/// `email` is stored as given, without format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Record {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Parses a single record from a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Compact JSON object encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Parses a whole collection from the bytes of a record file.
pub fn parse_collection(bytes: &[u8]) -> serde_json::Result<Vec<Record>> {
    serde_json::from_slice(bytes)
}

/// Serializes a collection as a compact JSON array.
pub fn serialize_collection(records: &[Record]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(records)
}

/// Returns the first record (in stored order) with the given id.
pub fn find_first<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.id == id)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
