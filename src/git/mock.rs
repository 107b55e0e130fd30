use std::collections::HashMap;

use git2::Oid;

use crate::error::{ChangelogError, Result};
use crate::git::{CommitRecord, History, LogQuery};

/// In-memory history for testing without actual git operations.
///
/// Models a single linear branch: commits are appended oldest-first and the
/// last commit is the branch tip. Tags are plain name-to-OID mappings.
pub struct MockHistory {
    commits: Vec<(Oid, String)>,
    tags: HashMap<String, Oid>,
}

impl MockHistory {
    /// Create a new empty history
    pub fn new() -> Self {
        MockHistory {
            commits: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit at the tip of the branch
    pub fn push_commit(&mut self, oid: Oid, summary: impl Into<String>) {
        self.commits.push((oid, summary.into()));
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    fn position(&self, oid: Oid) -> Option<usize> {
        self.commits.iter().position(|(c, _)| *c == oid)
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MockHistory {
    fn resolve_revision(&self, name: &str) -> Result<Option<Oid>> {
        if let Some(oid) = self.tags.get(name) {
            return Ok(Some(*oid));
        }
        Ok(self
            .commits
            .iter()
            .map(|(oid, _)| *oid)
            .find(|oid| oid.to_string() == name))
    }

    fn head_oid(&self) -> Result<Oid> {
        self.commits
            .last()
            .map(|(oid, _)| *oid)
            .ok_or_else(|| ChangelogError::repo("empty history".to_string()))
    }

    fn is_descendant(&self, commit: Oid, ancestor: Oid) -> Result<bool> {
        match (self.position(commit), self.position(ancestor)) {
            (Some(c), Some(a)) => Ok(c >= a),
            _ => Ok(false),
        }
    }

    fn log_summaries(&self, query: &LogQuery) -> Result<Vec<CommitRecord>> {
        let tip = match query.end {
            Some(oid) => oid,
            None => self.head_oid()?,
        };
        let tip_pos = self
            .position(tip)
            .ok_or_else(|| ChangelogError::range(format!("unknown commit {}", tip)))?;

        let mut records = Vec::new();
        for (oid, summary) in self.commits[..=tip_pos].iter().rev() {
            records.push(CommitRecord {
                summary: summary.clone(),
            });
            if query.start == Some(*oid) {
                break;
            }
        }

        Ok(records)
    }
}
