// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

// A named sequence as read from a FastA file. The name is the header line minus its leading '>';
// the residues are all the following non-blank lines, concatenated without separators. Either may
// be empty.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub name: String,
    pub residues: String,
}

impl SeqRecord {
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        SeqRecord {
            name: name.into(),
            residues: residues.into(),
        }
    }
}
