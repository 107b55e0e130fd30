//! Git history abstraction layer
//!
//! This module provides a trait-based abstraction over the history queries
//! the changelog pipeline needs, allowing for multiple implementations
//! including real Git repositories and an in-memory fake for testing.
//!
//! The primary abstraction is the [History] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2History]: A real implementation using the `git2` crate
//! - [mock::MockHistory]: An in-memory implementation for testing
//!
//! Most code should depend on the [History] trait rather than concrete
//! implementations so the extraction and filtering pipeline stays testable
//! without touching the filesystem or the network.

pub mod mock;
pub mod repository;
pub mod sync;

pub use mock::MockHistory;
pub use repository::Git2History;
pub use sync::{ensure_present, SyncMode};

use crate::error::Result;
use git2::Oid;

/// One line of summarized history output for a single revision.
///
/// The summary carries no leading hash; filtering and rendering treat it as
/// an opaque line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub summary: String,
}

/// A resolved, bounded log request.
///
/// Produced by range resolution and consumed by [History::log_summaries].
/// `None` for `end` means the current branch tip; `None` for `start` means
/// the first reachable commit. Both endpoints, when set, are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogQuery {
    pub start: Option<Oid>,
    pub end: Option<Oid>,
}

/// Capability interface over the version-control collaborator.
///
/// All methods return [crate::error::Result], mapping underlying failures
/// (like `git2::Error`) to [crate::error::ChangelogError] variants.
/// Implementors must be `Send + Sync`.
pub trait History: Send + Sync {
    /// Resolve a revision identifier (commit hash or tag name) to an OID.
    ///
    /// Returns `Ok(None)` when the name does not name any revision in this
    /// repository; that is not an error at this layer.
    fn resolve_revision(&self, name: &str) -> Result<Option<Oid>>;

    /// OID of the current branch tip.
    fn head_oid(&self) -> Result<Oid>;

    /// Whether `commit` is a descendant of `ancestor` in the history graph.
    ///
    /// A commit is considered a descendant of itself.
    fn is_descendant(&self, commit: Oid, ancestor: Oid) -> Result<bool>;

    /// One-line summaries for the commits selected by `query`, newest first.
    ///
    /// Both endpoints are inclusive when present. Zero records is a valid,
    /// non-error outcome distinct from the repository being unreachable.
    fn log_summaries(&self, query: &LogQuery) -> Result<Vec<CommitRecord>>;
}
