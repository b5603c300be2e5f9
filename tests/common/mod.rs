// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

pub mod utils;
