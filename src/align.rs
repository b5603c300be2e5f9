// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

// Global (Needleman-Wunsch) alignment scoring with linear gap weights. Only the score is computed:
// there is no traceback, so ties between the diagonal, up and left moves don't matter.

/// Match, mismatch and gap weights. Any sign is allowed.
///
/// Weights are 32-bit but stored (and summed) as i64: a cell is at most (len1 + len2) weights away
/// from zero, which cannot overflow for sequences that fit in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentWeights {
    match_score: i64,
    mismatch: i64,
    gap: i64,
}

impl AlignmentWeights {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        AlignmentWeights {
            match_score: match_score.into(),
            mismatch: mismatch.into(),
            gap: gap.into(),
        }
    }

    pub fn match_score(&self) -> i64 {
        self.match_score
    }

    pub fn mismatch(&self) -> i64 {
        self.mismatch
    }

    pub fn gap(&self) -> i64 {
        self.gap
    }

    /// Weight of aligning residue `a` against residue `b` (exact, case-sensitive byte equality).
    pub fn substitution(&self, a: u8, b: u8) -> i64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }
}

/// Dynamic-programming grid of (len1 + 1) x (len2 + 1) cells, stored row-major in one Vec.
struct ScoreTable {
    cols: usize,
    cells: Vec<i64>,
}

impl ScoreTable {
    /// Allocates the grid and fills row 0 and column 0 with pure-gap scores.
    fn with_gap_boundary(rows: usize, cols: usize, gap: i64) -> Self {
        let mut table = ScoreTable {
            cols,
            cells: vec![0; rows * cols],
        };
        for i in 0..rows {
            table.set(i, 0, gap * i as i64);
        }
        for j in 0..cols {
            table.set(0, j, gap * j as i64);
        }
        table
    }

    fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: i64) {
        self.cells[row * self.cols + col] = value;
    }

    fn last(&self) -> i64 {
        // Never empty: there is always at least the origin cell.
        self.cells[self.cells.len() - 1]
    }
}

/// Global alignment score of `seq1` against `seq2`.
///
/// Builds the full table (no banding or pruning, since weights may be negative) and returns its
/// bottom-right cell. The table is dropped before returning, so calls share no state and can run
/// concurrently.
pub fn score(seq1: &str, seq2: &str, weights: &AlignmentWeights) -> i64 {
    let s1 = seq1.as_bytes();
    let s2 = seq2.as_bytes();
    let rows = s1.len() + 1;
    let cols = s2.len() + 1;

    let mut table = ScoreTable::with_gap_boundary(rows, cols, weights.gap);
    for i in 1..rows {
        for j in 1..cols {
            let diag = table.get(i - 1, j - 1) + weights.substitution(s1[i - 1], s2[j - 1]);
            let up = table.get(i - 1, j) + weights.gap;
            let left = table.get(i, j - 1) + weights.gap;
            table.set(i, j, diag.max(up).max(left));
        }
    }
    table.last()
}
