// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jsonrec_core::RecordStore;

use crate::error::Result;

use super::emit;

/// Writes the first record with `id` as a JSON object, or nothing.
pub fn run(store: &RecordStore, id: &str, out: &mut dyn Write) -> Result<()> {
    let bytes = match store.find_by_id(id)? {
        Some(record) => record
            .to_json()
            .map_err(|e| jsonrec_core::Error::serialize(store.path(), e))?
            .into_bytes(),
        None => Vec::new(),
    };
    emit(out, &bytes)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
