// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use jsonrec_core::RecordStore;

use crate::error::Result;

use super::emit;

/// Passes the record file through to the sink byte for byte.
pub fn run(store: &RecordStore, out: &mut dyn Write) -> Result<()> {
    let bytes = store.list()?;
    emit(out, &bytes)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
