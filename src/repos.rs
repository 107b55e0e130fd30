use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// A repository to extract history from.
///
/// Parsed once from the input list and never mutated afterwards. The name is
/// derived from the location and doubles as the per-line label in the final
/// changelog and as the clone directory name under the workdir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    /// Short name, the last path component of the location without `.git`
    pub name: String,
    /// Remote URL or local path
    pub url: String,
}

impl RepoSpec {
    /// Derive a RepoSpec from a repository location.
    ///
    /// The name is the last `/`-separated component with a trailing `.git`
    /// stripped. A location that yields an empty name is malformed.
    pub fn from_url(url: &str) -> Result<Self> {
        let trimmed = url.trim_end_matches('/');
        let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
        let name = last.strip_suffix(".git").unwrap_or(last);

        if name.is_empty() {
            return Err(ChangelogError::config(format!(
                "cannot derive a repository name from '{}'",
                url
            )));
        }

        Ok(RepoSpec {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}

impl std::fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Read the ordered repository list from a file.
///
/// The file lists one repository URL or path per line. Blank lines and lines
/// starting with `#` are skipped. If `restrict` is non-empty, only the named
/// repositories are kept, preserving the input-list order rather than the
/// order of `restrict`.
pub fn read_repo_list(path: &Path, restrict: &[String]) -> Result<Vec<RepoSpec>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ChangelogError::config(format!("cannot read repository list '{}': {}", path.display(), e))
    })?;

    let mut repos = Vec::new();
    for line in contents.lines() {
        let url = line.trim();
        if url.is_empty() || url.starts_with('#') {
            continue;
        }

        let spec = RepoSpec::from_url(url)?;
        if !restrict.is_empty() && !restrict.contains(&spec.name) {
            continue;
        }
        repos.push(spec);
    }

    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_name_from_remote_url() {
        let spec = RepoSpec::from_url("https://github.com/example/widgets.git").unwrap();
        assert_eq!(spec.name, "widgets");
        assert_eq!(spec.url, "https://github.com/example/widgets.git");
    }

    #[test]
    fn test_name_without_git_suffix() {
        let spec = RepoSpec::from_url("git@host:team/tools").unwrap();
        assert_eq!(spec.name, "tools");
    }

    #[test]
    fn test_name_from_local_path() {
        let spec = RepoSpec::from_url("/srv/mirrors/kernel.git").unwrap();
        assert_eq!(spec.name, "kernel");
    }

    #[test]
    fn test_malformed_location_is_config_error() {
        let err = RepoSpec::from_url("///").unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }

    fn write_list(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(lines.as_bytes()).expect("write list");
        file
    }

    #[test]
    fn test_read_list_skips_blank_and_comment_lines() {
        let file = write_list("https://host/a.git\n\n# mirror, unused\nhttps://host/b.git\n");
        let repos = read_repo_list(file.path(), &[]).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "a");
        assert_eq!(repos[1].name, "b");
    }

    #[test]
    fn test_read_list_restrict_preserves_input_order() {
        let file = write_list("https://host/a.git\nhttps://host/b.git\nhttps://host/c.git\n");
        // restrict order intentionally reversed; input-list order must win
        let restrict = vec!["c".to_string(), "a".to_string()];
        let repos = read_repo_list(file.path(), &restrict).unwrap();
        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_read_list_missing_file_is_config_error() {
        let err = read_repo_list(Path::new("/nonexistent/repos.txt"), &[]).unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }
}
