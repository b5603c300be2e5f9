// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

pub mod fasta;
pub mod file;
pub mod record;
