// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jsonrec-core: file-as-database storage for the jsonrec record store.
//!
//! A record collection lives in a single file as one JSON array. This crate
//! owns the on-disk format: reading and validating the array, appending a
//! record in place, and rewriting the array after a removal.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use record::Record;
pub use store::{AddOutcome, RecordStore, RemoveOutcome};
