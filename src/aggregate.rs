use chrono::Local;

use crate::error::Result;
use crate::filter::{filter_records, PatternSet};
use crate::git::History;
use crate::range::RangeSpec;
use crate::repos::RepoSpec;

/// One line of the final changelog: a retained commit summary labelled with
/// the repository it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub repo: String,
    pub line: String,
}

impl ChangelogEntry {
    pub fn render(&self) -> String {
        format!("[{}] {}", self.repo, self.line)
    }
}

/// The aggregated result of one run.
///
/// Entries keep the input-list repository order; per-repository failures
/// contribute zero entries and one warning instead of aborting the run.
#[derive(Debug, Default)]
pub struct Changelog {
    pub header: Option<String>,
    pub entries: Vec<ChangelogEntry>,
    pub warnings: Vec<String>,
}

/// Header emitted when both range endpoints were supplied.
pub fn header_line(start: &str, end: &str, date: &str) -> String {
    format!("~~ Changelog generated {} [{}, {}] ~~", date, start, end)
}

/// Run the extraction and filtering pipeline for a single repository.
///
/// Resolves the range against this repository's history, extracts one-line
/// summaries, filters them, and labels the survivors.
pub fn changelog_for_repo<H: History>(
    name: &str,
    history: &H,
    range: &RangeSpec,
    match_set: &PatternSet,
    exclude_set: &PatternSet,
) -> Result<Vec<ChangelogEntry>> {
    let query = range.resolve(history)?;
    let records = history.log_summaries(&query)?;
    let kept = filter_records(records, match_set, exclude_set);

    Ok(kept
        .into_iter()
        .map(|record| ChangelogEntry {
            repo: name.to_string(),
            line: record.summary,
        })
        .collect())
}

/// Build the full changelog across the configured repository list.
///
/// Repositories are processed strictly in input order and each one's entries
/// are appended as a block; there is no reordering across repositories. The
/// `open` callback makes the repository's history available (clone/fetch and
/// open, in production) and is where transport failures surface. Any
/// per-repository error, from `open` or from extraction, becomes a warning
/// and the remaining repositories are still processed.
pub fn build_changelog<H, F>(
    repos: &[RepoSpec],
    mut open: F,
    range: &RangeSpec,
    match_set: &PatternSet,
    exclude_set: &PatternSet,
) -> Changelog
where
    H: History,
    F: FnMut(&RepoSpec) -> Result<H>,
{
    let header = match (&range.start, &range.end) {
        (Some(start), Some(end)) => {
            let date = Local::now().format("%b %d %Y").to_string();
            Some(header_line(start, end, &date))
        }
        _ => None,
    };

    let mut changelog = Changelog {
        header,
        ..Changelog::default()
    };

    for spec in repos {
        let result = open(spec).and_then(|history| {
            changelog_for_repo(&spec.name, &history, range, match_set, exclude_set)
        });

        match result {
            Ok(mut entries) => changelog.entries.append(&mut entries),
            Err(e) => changelog
                .warnings
                .push(format!("skipping repository '{}': {}", spec.name, e)),
        }
    }

    changelog
}
