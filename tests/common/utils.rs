// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use seqcompare::{
    align::AlignmentWeights,
    errors::SeqCompareError,
    pairwise::score_all,
    report::{write_report, ReportFormat},
    seq::fasta,
};

/// Runs the whole read → score → report pipeline on a file and returns what would go to stdout.
#[allow(dead_code)]
pub fn report_for(
    path: &str,
    weights: (i32, i32, i32),
    threads: usize,
    format: ReportFormat,
) -> Result<String, SeqCompareError> {
    let records = fasta::read_fasta_file(path)?;
    let (m, s, g) = weights;
    let scores = score_all(&records, &AlignmentWeights::new(m, s, g), threads)?;
    let mut buf: Vec<u8> = Vec::new();
    write_report(&mut buf, &scores, format)?;
    Ok(String::from_utf8(buf).expect("report is UTF-8"))
}

#[allow(dead_code)]
pub fn text_report(path: &str, weights: (i32, i32, i32)) -> String {
    report_for(path, weights, 1, ReportFormat::Text).expect("pipeline")
}
