use crate::error::{ChangelogError, Result};
use crate::git::{History, LogQuery};

/// Requested revision range, both endpoints independently optional.
///
/// Endpoints are commit hashes or tag names and are inclusive. Four legal
/// states: neither set (full history), start only (start to tip), end only
/// (first commit to end), both set (closed interval).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeSpec {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        RangeSpec { start, end }
    }

    /// Both endpoints supplied.
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Validate the endpoints against one repository's history and package
    /// them into a [LogQuery].
    ///
    /// The end of the walk is the named end revision, or the branch tip when
    /// no end was given. Whenever a start is set, the effective end must be
    /// a descendant of it; otherwise the range is not resolvable in this
    /// repository. Resolution never walks history itself.
    pub fn resolve(&self, history: &dyn History) -> Result<LogQuery> {
        let start = match &self.start {
            Some(name) => Some(lookup(history, name)?),
            None => None,
        };
        let end = match &self.end {
            Some(name) => Some(lookup(history, name)?),
            None => match start {
                Some(_) => Some(history.head_oid()?),
                None => None,
            },
        };

        if let (Some(start_oid), Some(end_oid)) = (start, end) {
            if !history.is_descendant(end_oid, start_oid)? {
                let end_label = self.end.as_deref().unwrap_or("HEAD");
                let start_label = self.start.as_deref().unwrap_or_default();
                return Err(ChangelogError::range(format!(
                    "'{}' is not a descendant of '{}'",
                    end_label, start_label
                )));
            }
        }

        Ok(LogQuery { start, end })
    }
}

fn lookup(history: &dyn History, name: &str) -> Result<git2::Oid> {
    history
        .resolve_revision(name)?
        .ok_or_else(|| ChangelogError::range(format!("unknown revision '{}'", name)))
}
