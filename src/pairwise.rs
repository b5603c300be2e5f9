// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::align::{score, AlignmentWeights};
use crate::errors::SeqCompareError;
use crate::seq::record::SeqRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairScore {
    pub first: String,
    pub second: String,
    pub score: i64,
}

/// All index pairs (i, j) with i < j, ordered by i then j.
pub fn pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n).tuple_combinations().collect()
}

fn score_pair(
    records: &[SeqRecord],
    (i, j): (usize, usize),
    weights: &AlignmentWeights,
) -> PairScore {
    let (a, b) = (&records[i], &records[j]);
    let s = score(&a.residues, &b.residues, weights);
    debug!("{} vs {}: {}", a.name, b.name, s);
    PairScore {
        first: a.name.clone(),
        second: b.name.clone(),
        score: s,
    }
}

/// Scores every unordered pair of records.
///
/// `threads == 1` runs on the calling thread; any other value uses a dedicated rayon pool of that
/// many workers (0 lets rayon pick). The result is in `pairs()` order either way.
pub fn score_all(
    records: &[SeqRecord],
    weights: &AlignmentWeights,
    threads: usize,
) -> Result<Vec<PairScore>, SeqCompareError> {
    if records.len() < 2 {
        return Err(SeqCompareError::InsufficientSequences(records.len()));
    }
    let pair_indices = pairs(records.len());
    info!(
        "Scoring {} pairs of {} sequences",
        pair_indices.len(),
        records.len()
    );

    if threads == 1 {
        return Ok(pair_indices
            .into_iter()
            .map(|p| score_pair(records, p, weights))
            .collect());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    info!("Using {} worker threads", pool.current_num_threads());
    // Indexed parallel iterators collect in input order, whatever the completion order.
    Ok(pool.install(|| {
        pair_indices
            .into_par_iter()
            .map(|p| score_pair(records, p, weights))
            .collect()
    }))
}
