// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

pub mod align;
pub mod config;
pub mod errors;
pub mod pairwise;
pub mod report;
mod runner;
pub mod seq;

use crate::errors::SeqCompareError;

pub fn run() -> Result<(), SeqCompareError> {
    runner::run()
}
