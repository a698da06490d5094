//! Commit-log access abstraction.
//!
//! The release pipeline only needs three things from version control: the
//! most recent version tag, the ordered commits since it, and (optionally)
//! a new lightweight tag. The [CommitLog] trait captures exactly that, so
//! the core pipeline stays independent of how history is read.
//!
//! Implementations:
//! - [repository::Git2Log]: real repositories via the `git2` crate
//! - [mock::MockLog]: in-memory implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockLog;
pub use repository::Git2Log;

use crate::domain::RawCommit;
use crate::error::Result;

/// Log reader contract the release pipeline depends on
pub trait CommitLog {
    /// Find the newest tag carrying the given prefix whose remainder parses
    /// as a semantic version. `None` means no release has happened yet.
    fn latest_version_tag(&self, prefix: &str) -> Result<Option<String>>;

    /// Commits after `tag` up to HEAD, oldest first. `None` means the whole
    /// history.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>>;

    /// Create a local lightweight tag at HEAD. Pushing it anywhere is
    /// somebody else's job.
    fn create_tag(&self, name: &str) -> Result<()>;
}
