// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn jsonrec() -> Command {
    cargo_bin_cmd!("jsonrec")
}

/// Command preloaded with `--fileName <temp>/users.json --operation <op>`.
pub fn op(temp: &TempDir, operation: &str) -> Command {
    let mut cmd = jsonrec();
    cmd.arg("--fileName")
        .arg(users_file(temp))
        .arg("--operation")
        .arg(operation);
    cmd
}

pub fn users_file(temp: &TempDir) -> PathBuf {
    temp.path().join("users.json")
}

/// Helper to add a record and assert success.
pub fn add_item(temp: &TempDir, item: &str) {
    op(temp, "add").arg("--item").arg(item).assert().success();
}

pub fn read_users(temp: &TempDir) -> String {
    std::fs::read_to_string(users_file(temp)).unwrap()
}
