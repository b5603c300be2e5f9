// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::io::{stdout, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::align::AlignmentWeights;
use crate::config::{find_config, SeqCompareConfig};
use crate::errors::SeqCompareError;
use crate::pairwise::score_all;
use crate::report::{write_report, ReportFormat};
use crate::seq::fasta::read_fasta_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// Sequence file (FastA)
    seq_fname: PathBuf,

    /// Match weight
    #[arg(value_name = "MATCH")]
    match_score: i32,

    /// Mismatch weight
    mismatch: i32,

    /// Gap weight
    gap: i32,

    /// Number of worker threads (0: one per CPU; default: 1)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Output format
    #[arg(short, long = "format",
        help = "Output format [text|json] (or just t|j); default: text",
        hide_possible_values = true,
    )]
    format: Option<ReportFormat>,
}

// Flags on the command line win over the config file, which wins over built-in defaults.
struct Settings {
    threads: usize,
    format: ReportFormat,
}

fn resolve_settings(cli: &Cli, config: Option<&SeqCompareConfig>) -> Settings {
    Settings {
        threads: cli
            .threads
            .or_else(|| config.and_then(|c| c.threads))
            .unwrap_or(1),
        format: cli
            .format
            .or_else(|| config.and_then(|c| c.format))
            .unwrap_or_default(),
    }
}

pub fn run() -> Result<(), SeqCompareError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    let config = match find_config() {
        Some(path) => {
            info!("Reading config from {}", path.display());
            Some(SeqCompareConfig::from_file(&path)?)
        }
        None => None,
    };
    let settings = resolve_settings(&cli, config.as_ref());

    let records = read_fasta_file(&cli.seq_fname)?;
    info!(
        "Read {} sequences from {}",
        records.len(),
        cli.seq_fname.display()
    );

    let weights = AlignmentWeights::new(cli.match_score, cli.mismatch, cli.gap);
    let scores = score_all(&records, &weights, settings.threads)?;

    let mut out = BufWriter::new(stdout().lock());
    write_report(&mut out, &scores, settings.format)
}
