// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::{fmt, io};

#[derive(Debug)]
pub enum SeqCompareError {
    Io(io::Error),
    FileOpen(String, io::Error),
    InsufficientSequences(usize),
    Config(String),
    ThreadPool(String),
    Json(serde_json::Error),
}

// These allow conversion to SeqCompareError, so that '?' works throughout the crate.

impl From<io::Error> for SeqCompareError {
    fn from(e: io::Error) -> Self {
        SeqCompareError::Io(e)
    }
}

impl From<serde_json::Error> for SeqCompareError {
    fn from(e: serde_json::Error) -> Self {
        SeqCompareError::Json(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for SeqCompareError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        SeqCompareError::ThreadPool(e.to_string())
    }
}

impl fmt::Display for SeqCompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqCompareError::Io(e) => write!(f, "I/O error: {}", e),
            SeqCompareError::FileOpen(path, e) => {
                write!(f, "Error in opening file {}: {}", path, e)
            }
            SeqCompareError::InsufficientSequences(n) => write!(
                f,
                "Error: file contains less than two sequences (found {})",
                n
            ),
            SeqCompareError::Config(msg) => write!(f, "Config error: {}", msg),
            SeqCompareError::ThreadPool(msg) => write!(f, "Thread pool error: {}", msg),
            SeqCompareError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for SeqCompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqCompareError::Io(e) | SeqCompareError::FileOpen(_, e) => Some(e),
            SeqCompareError::Json(e) => Some(e),
            _ => None,
        }
    }
}
