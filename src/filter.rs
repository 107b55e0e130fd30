use regex::RegexBuilder;

use crate::error::{ChangelogError, Result};
use crate::git::CommitRecord;

/// How the patterns of a set combine when evaluated against one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Every pattern must be found in the line (match-set)
    All,
    /// No pattern may be found in the line (exclude-set)
    None,
}

/// An ordered set of compiled patterns with a combination mode.
///
/// Patterns are case-insensitive regular expressions searched anywhere in
/// the line, not anchored to it. An empty set is vacuously satisfied in
/// either mode, so "no filters" means "pass everything".
#[derive(Debug)]
pub struct PatternSet {
    mode: Combine,
    patterns: Vec<regex::Regex>,
}

impl PatternSet {
    /// Compile raw pattern strings into a set.
    ///
    /// Invalid pattern syntax is a fatal configuration error; it is reported
    /// here, before any repository is processed, never per-line.
    pub fn compile(raw: &[String], mode: Combine) -> Result<Self> {
        let mut patterns = Vec::with_capacity(raw.len());
        for pattern in raw {
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ChangelogError::pattern(format!("'{}': {}", pattern, e)))?;
            patterns.push(compiled);
        }

        Ok(PatternSet { mode, patterns })
    }

    /// Evaluate this set against a single line.
    pub fn satisfied_by(&self, line: &str) -> bool {
        match self.mode {
            Combine::All => self.patterns.iter().all(|p| p.is_match(line)),
            Combine::None => !self.patterns.iter().any(|p| p.is_match(line)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Whether a line survives both filter sets.
pub fn retained(line: &str, match_set: &PatternSet, exclude_set: &PatternSet) -> bool {
    match_set.satisfied_by(line) && exclude_set.satisfied_by(line)
}

/// Apply both filter sets to a record sequence, preserving order.
///
/// Single pass, no state between records. Blank summaries are dropped.
pub fn filter_records(
    records: Vec<CommitRecord>,
    match_set: &PatternSet,
    exclude_set: &PatternSet,
) -> Vec<CommitRecord> {
    records
        .into_iter()
        .filter(|r| !r.summary.is_empty() && retained(&r.summary, match_set, exclude_set))
        .collect()
}
