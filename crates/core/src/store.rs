// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed record store.
//!
//! The whole collection lives in one file as a JSON array. Every operation
//! opens the file, does its read/seek/write sequence and drops the handle
//! before returning; nothing is cached between calls.
//!
//! - `add` appends in place: only the new element and the closing bracket
//!   are written, the existing array is never re-serialized.
//! - `remove` rewrites the whole array into a temp file next to the target
//!   and renames it over the original.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::record::{find_first, parse_collection, serialize_collection, Record};

/// Result of [`RecordStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was appended to the end of the array.
    Added,
    /// A record with this id is already stored; the file was not touched.
    AlreadyExists,
}

/// Result of [`RecordStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first record with the id was removed.
    Removed(Record),
    /// No record had the id; the file was not touched.
    NotFound,
}

/// A record collection stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        RecordStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw file contents, creating an empty file if absent.
    pub fn list(&self) -> Result<Vec<u8>> {
        let mut file = self.open_create()?;
        let bytes = self.read_to_end(&mut file)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "listed record file");
        Ok(bytes)
    }

    /// Appends `record` unless a record with the same id is already stored.
    ///
    /// An empty (or freshly created) file becomes a one-element array. For a
    /// non-empty file the new element is spliced in front of the closing
    /// bracket. A file that does not hold a valid array is left untouched
    /// and reported as [`Error::Parse`].
    pub fn add(&self, record: &Record) -> Result<AddOutcome> {
        let mut file = self.open_create()?;
        let size = file
            .metadata()
            .map_err(|e| Error::io(&self.path, e))?
            .len();

        let (prefix, offset) = if size == 0 {
            ("[", 0)
        } else {
            let bytes = self.read_to_end(&mut file)?;
            let records = parse_collection(&bytes).map_err(|e| Error::parse(&self.path, e))?;

            if find_first(&records, &record.id).is_some() {
                tracing::debug!(id = %record.id, "record already exists, skipping add");
                return Ok(AddOutcome::AlreadyExists);
            }

            let offset = self.closing_bracket(&bytes)?;
            let prefix = if records.is_empty() { "" } else { ",\n" };
            (prefix, offset)
        };

        let json = record
            .to_json()
            .map_err(|e| Error::serialize(&self.path, e))?;
        let mut fragment = Vec::with_capacity(prefix.len() + json.len() + 1);
        fragment.extend_from_slice(prefix.as_bytes());
        fragment.extend_from_slice(json.as_bytes());
        fragment.push(b']');

        tracing::debug!(offset, bytes = fragment.len(), "appending record in place");

        file.seek(SeekFrom::Start(offset))
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(&fragment)
            .map_err(|e| Error::io(&self.path, e))?;
        // Drop whatever trailed the old closing bracket.
        file.set_len(offset + fragment.len() as u64)
            .map_err(|e| Error::io(&self.path, e))?;
        file.flush().map_err(|e| Error::io(&self.path, e))?;

        tracing::info!(id = %record.id, path = %self.path.display(), "added record");
        Ok(AddOutcome::Added)
    }

    /// Returns the first record in stored order whose id matches.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        let records = self.load()?.1;
        let found = find_first(&records, id).cloned();
        tracing::debug!(id, found = found.is_some(), scanned = records.len(), "find by id");
        Ok(found)
    }

    /// Removes the first record whose id matches and rewrites the file.
    ///
    /// The file must already exist. The shortened collection is written to a
    /// temp file in the same directory as the resolved file and renamed over
    /// it, so a failed write leaves the old contents in place. The directory
    /// holding the resolved file must be writable.
    pub fn remove(&self, id: &str) -> Result<RemoveOutcome> {
        let (file, mut records) = self.load()?;

        let Some(index) = records.iter().position(|r| r.id == id) else {
            tracing::debug!(id, scanned = records.len(), "no record to remove");
            return Ok(RemoveOutcome::NotFound);
        };
        let removed = records.remove(index);

        let bytes =
            serialize_collection(&records).map_err(|e| Error::serialize(&self.path, e))?;
        let permissions = file
            .metadata()
            .map_err(|e| Error::io(&self.path, e))?
            .permissions();
        drop(file);

        self.replace_contents(&bytes, permissions)?;

        tracing::info!(id, remaining = records.len(), path = %self.path.display(), "removed record");
        Ok(RemoveOutcome::Removed(removed))
    }

    fn open_create(&self) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Opens an existing file read-only and parses the whole collection.
    fn load(&self) -> Result<(File, Vec<Record>)> {
        let mut file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let bytes = self.read_to_end(&mut file)?;
        let records = parse_collection(&bytes).map_err(|e| Error::parse(&self.path, e))?;
        Ok((file, records))
    }

    fn read_to_end(&self, file: &mut File) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(bytes)
    }

    /// Offset of the array's closing bracket, skipping trailing whitespace.
    fn closing_bracket(&self, bytes: &[u8]) -> Result<u64> {
        match bytes.iter().rposition(|b| !b.is_ascii_whitespace()) {
            Some(pos) if bytes[pos] == b']' => Ok(pos as u64),
            _ => Err(Error::parse(
                &self.path,
                serde_json::Error::custom("record file does not end with ']'"),
            )),
        }
    }

    fn replace_contents(&self, bytes: &[u8], permissions: std::fs::Permissions) -> Result<()> {
        // Rename over the file behind any symlink, not the link itself.
        let target = std::fs::canonicalize(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(&self.path, e))?;
        tmp.write_all(bytes)
            .map_err(|e| Error::io(&self.path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io(&self.path, e))?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(&self.path, e))?;
        tmp.persist(&target)
            .map_err(|e| Error::io(&self.path, e.error))?;

        tracing::debug!(bytes = bytes.len(), "rewrote record file");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
