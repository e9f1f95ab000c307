// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jsonrec_core::{RecordStore, RemoveOutcome};

use crate::error::Result;

use super::emit;

/// Removes the first record with `id`, or reports that none matched.
pub fn run(store: &RecordStore, id: &str, out: &mut dyn Write) -> Result<()> {
    match store.remove(id)? {
        RemoveOutcome::Removed(_) => Ok(()),
        RemoveOutcome::NotFound => {
            let msg = format!("Item with id {} not found", id);
            emit(out, msg.as_bytes())
        }
    }
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
