use std::path::Path;

use git2::{ErrorCode, ObjectType, Oid, Repository};

use crate::error::{ChangelogError, Result};
use crate::git::{CommitRecord, History, LogQuery};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2History {
    repo: Repository,
}

impl std::fmt::Debug for Git2History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git2History").finish_non_exhaustive()
    }
}

impl Git2History {
    /// Open an existing local working copy.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path.as_ref()).map_err(|e| {
            ChangelogError::repo(format!(
                "cannot open repository at '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Git2History { repo })
    }
}

impl History for Git2History {
    fn resolve_revision(&self, name: &str) -> Result<Option<Oid>> {
        match self.repo.revparse_single(name) {
            Ok(object) => {
                // Peel annotated tags down to the commit they point at
                let oid = object
                    .peel(ObjectType::Commit)
                    .map_err(|e| {
                        ChangelogError::range(format!("'{}' does not name a commit: {}", name, e))
                    })?
                    .id();
                Ok(Some(oid))
            }
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ChangelogError::range(format!(
                "cannot resolve revision '{}': {}",
                name, e
            ))),
        }
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| ChangelogError::repo("HEAD is unborn or invalid".to_string()))
    }

    fn is_descendant(&self, commit: Oid, ancestor: Oid) -> Result<bool> {
        if commit == ancestor {
            return Ok(true);
        }
        Ok(self.repo.graph_descendant_of(commit, ancestor)?)
    }

    fn log_summaries(&self, query: &LogQuery) -> Result<Vec<CommitRecord>> {
        let tip = match query.end {
            Some(oid) => oid,
            None => self.head_oid()?,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(tip)?;

        let mut records = Vec::new();

        // Walk newest-first; stop after emitting the start commit so both
        // endpoints stay inclusive.
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let summary = commit.summary().unwrap_or("").to_string();
            records.push(CommitRecord { summary });

            if query.start == Some(oid) {
                break;
            }
        }

        Ok(records)
    }
}

// SAFETY: Git2History only performs read operations through git2, which is
// thread-safe for reads via libgit2's design.
unsafe impl Sync for Git2History {}
