// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records, in the order their headers
// appear in the file.
//

pub type SeqFile = Vec<SeqRecord>;
