// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use serde::Deserialize;

use crate::errors::SeqCompareError;
use crate::pairwise::PairScore;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    #[clap(name = "text")]
    #[clap(alias = "t")]
    Text,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

pub fn score_line(pair: &PairScore) -> String {
    format!(
        "Score for alignment of {} to {} is {}",
        pair.first, pair.second, pair.score
    )
}

pub fn write_report<W: Write>(
    out: &mut W,
    scores: &[PairScore],
    format: ReportFormat,
) -> Result<(), SeqCompareError> {
    match format {
        ReportFormat::Text => {
            for pair in scores {
                writeln!(out, "{}", score_line(pair))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, scores)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
