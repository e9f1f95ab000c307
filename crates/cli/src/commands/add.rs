// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jsonrec_core::{AddOutcome, Record, RecordStore};

use crate::error::Result;

use super::emit;

/// Appends `record`, or reports that its id is taken.
///
/// A duplicate id is not an error: the file is left alone and the sink
/// gets a short notice instead.
pub fn run(store: &RecordStore, record: &Record, out: &mut dyn Write) -> Result<()> {
    match store.add(record)? {
        AddOutcome::Added => Ok(()),
        AddOutcome::AlreadyExists => {
            let msg = format!("Item with id {} already exists", record.id);
            emit(out, msg.as_bytes())
        }
    }
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
