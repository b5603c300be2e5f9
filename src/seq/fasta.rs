// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::SeqCompareError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

const HEADER_MARKER: char = '>';

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, SeqCompareError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SeqCompareError::FileOpen(path.display().to_string(), e))?;
    parse_fasta(BufReader::new(file))
}

/// Splits a FastA stream into records. Blank lines are skipped anywhere, sequence lines before the
/// first header are dropped, and a header with no sequence lines still yields a (residue-less)
/// record.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SeqFile, SeqCompareError> {
    let mut result: SeqFile = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let raw = line?;
        let l = strip_line_terminator(&raw);
        if let Some(name) = l.strip_prefix(HEADER_MARKER) {
            // The previous record (if any) is already complete in `result`.
            result.push(SeqRecord::new(name, String::new()));
        } else if l.trim().is_empty() {
            continue;
        } else if let Some(current) = result.last_mut() {
            current.residues.push_str(l);
        } else {
            debug!("Discarding line {} (no header seen yet)", lineno + 1);
        }
    }

    Ok(result)
}

// lines() already drops a "\n" or "\r\n", but a last line may still end in a stray '\r'.
fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}
