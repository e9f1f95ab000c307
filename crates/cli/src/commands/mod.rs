// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod find;
pub mod list;
pub mod remove;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use crate::error::{Error, Result};

/// Writes `bytes` to the output sink.
///
/// An empty slice still goes through the sink so callers observe an
/// explicit, zero-length result.
pub(crate) fn emit(out: &mut dyn Write, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}
