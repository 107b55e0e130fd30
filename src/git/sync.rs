use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::{ChangelogError, Result};
use crate::repos::RepoSpec;

/// How to bring an already-cached clone up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Fetch the latest refs into the existing clone
    Refresh,
    /// Remove the cached clone and clone from scratch
    Clean,
}

/// Ensure a local working copy of `spec` exists under `workdir` and is up to
/// date, returning its path.
///
/// A fresh clone is made when no cached copy exists. An existing copy is
/// refreshed with a fetch, or removed and re-cloned under [SyncMode::Clean].
/// A cached path that exists but is not a directory is removed first.
pub fn ensure_present(spec: &RepoSpec, workdir: &Path, mode: SyncMode) -> Result<PathBuf> {
    let path = workdir.join(&spec.name);

    if mode == SyncMode::Clean && path.is_dir() {
        fs::remove_dir_all(&path)?;
    }

    if path.exists() && !path.is_dir() {
        fs::remove_file(&path)?;
    }

    if path.is_dir() {
        fetch_all(&path, spec)?;
    } else {
        fs::create_dir_all(workdir)?;
        Repository::clone(&spec.url, &path).map_err(|e| {
            ChangelogError::repo(format!("cannot clone '{}': {}", spec.url, e))
        })?;
    }

    Ok(path)
}

/// Fetch all branches and tags from origin into an existing clone.
fn fetch_all(path: &Path, spec: &RepoSpec) -> Result<()> {
    let repo = Repository::open(path).map_err(|e| {
        ChangelogError::repo(format!(
            "cached copy of '{}' at '{}' is not a repository: {}",
            spec.name,
            path.display(),
            e
        ))
    })?;

    let mut remote = repo.find_remote("origin").map_err(|e| {
        ChangelogError::repo(format!("'{}' has no origin remote: {}", spec.name, e))
    })?;

    let refspecs = [
        "+refs/heads/*:refs/remotes/origin/*",
        "+refs/tags/*:refs/tags/*",
    ];
    remote.fetch(&refspecs, None, None).map_err(|e| {
        ChangelogError::repo(format!("cannot fetch '{}' from '{}': {}", spec.name, spec.url, e))
    })?;

    Ok(())
}
