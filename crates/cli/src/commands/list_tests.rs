// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;

#[test]
fn test_list_missing_file_outputs_nothing() {
    let mut ctx = TestContext::new();

    run(&ctx.store, &mut ctx.out).unwrap();

    assert!(ctx.out.is_empty());
    assert!(ctx.store.path().exists());
}

#[test]
fn test_list_outputs_file_verbatim() {
    let content = "[\n  {\"id\": \"1\", \"email\": \"a@b.com\", \"age\": 23}\n]\n";
    let mut ctx = TestContext::with_content(content);

    run(&ctx.store, &mut ctx.out).unwrap();

    assert_eq!(ctx.output(), content);
}

#[test]
fn test_list_after_adds() {
    let mut ctx = TestContext::new();
    ctx.add("1", "a@b.com", 23).add("2", "c@d.com", 31);

    run(&ctx.store, &mut ctx.out).unwrap();

    let listed: serde_json::Value = serde_json::from_slice(&ctx.out).unwrap();
    assert_eq!(
        listed,
        serde_json::json!([
            {"id": "1", "email": "a@b.com", "age": 23},
            {"id": "2", "email": "c@d.com", "age": 31}
        ])
    );
}
