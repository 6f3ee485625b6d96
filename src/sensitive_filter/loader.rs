// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Line-delimited pattern and stopper sources

use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use super::error::{FilterError, Result};
use super::stoppers::{LineOutcome, StopperSet};
use super::trie::PatternTrie;

/// Counts gathered while loading one source
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// New entries added
    pub loaded: usize,
    /// Entries that were already present
    pub duplicates: usize,
    /// Stopper lines with more than one scalar
    pub ignored: usize,
    /// Lines that were not valid UTF-8
    pub skipped_lines: usize,
}

impl LoadReport {
    pub fn merge(&mut self, other: LoadReport) {
        self.loaded += other.loaded;
        self.duplicates += other.duplicates;
        self.ignored += other.ignored;
        self.skipped_lines += other.skipped_lines;
    }
}

/// Load one pattern per line into `trie`. Blank lines are ignored.
///
/// On an I/O error the patterns read so far stay in the trie.
pub fn load_patterns<R: BufRead>(
    trie: &mut PatternTrie,
    reader: R,
    source_id: &str,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for_each_line(reader, source_id, &mut report, |line, report| {
        if line.trim().is_empty() {
            return Ok(());
        }
        if trie.insert(line)? {
            report.loaded += 1;
        } else {
            report.duplicates += 1;
        }
        Ok(())
    })?;

    info!(
        source = source_id,
        loaded = report.loaded,
        duplicates = report.duplicates,
        skipped = report.skipped_lines,
        "loaded patterns"
    );
    Ok(report)
}

/// Load one stopper per line into `stoppers`.
///
/// A line must hold exactly one scalar; an empty line means space. Longer
/// lines are counted as ignored.
pub fn load_stoppers<R: BufRead>(
    stoppers: &mut StopperSet,
    reader: R,
    source_id: &str,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for_each_line(reader, source_id, &mut report, |line, report| {
        match stoppers.insert_line(line) {
            LineOutcome::Added => report.loaded += 1,
            LineOutcome::Duplicate => report.duplicates += 1,
            LineOutcome::Ignored => {
                warn!(source = source_id, line, "ignoring multi-char stopper line");
                report.ignored += 1;
            }
        }
        Ok(())
    })?;

    info!(
        source = source_id,
        loaded = report.loaded,
        ignored = report.ignored,
        skipped = report.skipped_lines,
        "loaded stoppers"
    );
    Ok(report)
}

pub fn load_patterns_from_path(trie: &mut PatternTrie, path: &Path) -> Result<LoadReport> {
    let source_id = path.display().to_string();
    let reader = open(path, &source_id)?;
    load_patterns(trie, reader, &source_id)
}

pub fn load_stoppers_from_path(stoppers: &mut StopperSet, path: &Path) -> Result<LoadReport> {
    let source_id = path.display().to_string();
    let reader = open(path, &source_id)?;
    load_stoppers(stoppers, reader, &source_id)
}

fn open(path: &Path, source_id: &str) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| FilterError::Load {
            source_id: source_id.to_string(),
            source,
        })
}

/// Split on `\n`, strip a trailing `\r`, and skip lines that fail to decode
fn for_each_line<R, F>(
    reader: R,
    source_id: &str,
    report: &mut LoadReport,
    mut handle: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str, &mut LoadReport) -> Result<()>,
{
    for (idx, line) in reader.split(b'\n').enumerate() {
        let mut bytes = line.map_err(|source| FilterError::Load {
            source_id: source_id.to_string(),
            source,
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        match String::from_utf8(bytes) {
            Ok(text) => handle(&text, report)?,
            Err(_) => {
                warn!(source = source_id, line = idx + 1, "skipping undecodable line");
                report.skipped_lines += 1;
            }
        }
    }
    Ok(())
}
