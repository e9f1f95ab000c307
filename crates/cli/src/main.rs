// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use jsonrec::Cli;

fn main() {
    let cli = Cli::parse();
    jsonrec::logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = jsonrec::perform(&cli.arguments(), &mut stdout) {
        tracing::debug!(kind = ?e.kind(), "operation failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
