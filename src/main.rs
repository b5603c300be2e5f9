// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::process::ExitCode;

fn main() -> ExitCode {
    match seqcompare::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
