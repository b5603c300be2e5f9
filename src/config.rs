// SPDX-License-Identifier: MIT
// Copyright (c) 2026 seqcompare contributors

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::SeqCompareError;
use crate::report::ReportFormat;

pub const CONFIG_FILENAME: &str = ".seqcompareconfig";

/// Optional defaults, read from a JSON file. Command-line flags take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeqCompareConfig {
    pub threads: Option<usize>,
    pub format: Option<ReportFormat>,
}

impl SeqCompareConfig {
    pub fn from_file(path: &Path) -> Result<Self, SeqCompareError> {
        let text = fs::read_to_string(path)
            .map_err(|e| SeqCompareError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
            .map_err(|e| SeqCompareError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Config path to use, if any: `$HOME` first, then the working directory.
pub fn find_config() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    first_config_in(home.iter().chain(cwd.iter()))
}

fn first_config_in<'a, I>(dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    dirs.into_iter()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|path| path.is_file())
}
