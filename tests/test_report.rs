// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

mod common;

use crate::common::utils;

use insta::assert_snapshot;

use seqcompare::{errors::SeqCompareError, report::ReportFormat};

#[test]
fn single_pair_hand_computed() {
    let report = utils::text_report("tests/data/pair.fas", (1, -1, -2));
    assert_eq!("Score for alignment of alpha to beta is 2\n", report);
}

#[test]
fn all_pairs_in_order() {
    let report = utils::text_report("tests/data/four.fas", (1, -1, -1));
    assert_snapshot!(report.trim_end(), @r"
    Score for alignment of seq1 to seq2 is 2
    Score for alignment of seq1 to seq3 is 2
    Score for alignment of seq1 to  is 1
    Score for alignment of seq2 to seq3 is 3
    Score for alignment of seq2 to  is -1
    Score for alignment of seq3 to  is 0
    ");
}

#[test]
fn other_weights() {
    let report = utils::text_report("tests/data/four.fas", (2, -1, -2));
    assert_snapshot!(report.trim_end(), @r"
    Score for alignment of seq1 to seq2 is 5
    Score for alignment of seq1 to seq3 is 4
    Score for alignment of seq1 to  is 4
    Score for alignment of seq2 to seq3 is 6
    Score for alignment of seq2 to  is 0
    Score for alignment of seq3 to  is 2
    ");
}

#[test]
fn parallel_report_is_identical() {
    let sequential = utils::text_report("tests/data/four.fas", (2, -1, -2));
    for threads in [0, 2, 3] {
        let parallel =
            utils::report_for("tests/data/four.fas", (2, -1, -2), threads, ReportFormat::Text)
                .expect("pipeline");
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn crlf_names_are_clean() {
    let report = utils::text_report("tests/data/crlf.fas", (1, -1, -2));
    assert_eq!("Score for alignment of win1 to win2 is 2\n", report);
}

#[test]
fn json_report() {
    let report = utils::report_for("tests/data/pair.fas", (1, -1, -2), 1, ReportFormat::Json)
        .expect("pipeline");
    let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
    assert_eq!(
        parsed,
        serde_json::json!([{ "first": "alpha", "second": "beta", "score": 2 }])
    );
}

#[test]
fn single_sequence_is_an_error() {
    let result = utils::report_for("tests/data/single.fas", (1, -1, -1), 1, ReportFormat::Text);
    assert!(matches!(
        result,
        Err(SeqCompareError::InsufficientSequences(1))
    ));
}

#[test]
fn missing_file_is_an_error() {
    let result = utils::report_for("tests/data/absent.fas", (1, -1, -1), 1, ReportFormat::Text);
    match result {
        Err(e @ SeqCompareError::FileOpen(..)) => {
            assert!(e.to_string().contains("tests/data/absent.fas"))
        }
        other => panic!("expected FileOpen, got {:?}", other),
    }
}
