use std::sync::Mutex;

use crate::domain::RawCommit;
use crate::error::Result;
use crate::log::CommitLog;

/// Mock commit log for testing without actual git operations
#[derive(Default)]
pub struct MockLog {
    commits: Vec<RawCommit>,
    latest_tag: Option<String>,
    created_tags: Mutex<Vec<String>>,
}

impl MockLog {
    /// Create a new empty mock log
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log with commits, oldest first
    pub fn with_commits(commits: Vec<RawCommit>) -> Self {
        MockLog {
            commits,
            ..Self::default()
        }
    }

    /// Append a commit to the log
    pub fn add_commit(&mut self, commit: RawCommit) {
        self.commits.push(commit);
    }

    /// Set the tag reported as the latest release
    pub fn set_latest_tag(&mut self, tag: impl Into<String>) {
        self.latest_tag = Some(tag.into());
    }

    /// Tags created through the trait, in creation order
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.lock().unwrap().clone()
    }
}

impl CommitLog for MockLog {
    fn latest_version_tag(&self, _prefix: &str) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn commits_since(&self, _tag: Option<&str>) -> Result<Vec<RawCommit>> {
        Ok(self.commits.clone())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.created_tags.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reports_latest_tag() {
        let mut log = MockLog::new();
        assert_eq!(log.latest_version_tag("v").unwrap(), None);
        log.set_latest_tag("v1.2.3");
        assert_eq!(
            log.latest_version_tag("v").unwrap(),
            Some("v1.2.3".to_string())
        );
    }

    #[test]
    fn test_mock_preserves_commit_order() {
        let log = MockLog::with_commits(vec![
            RawCommit::new("a1", "feat: one", ""),
            RawCommit::new("a2", "fix: two", ""),
        ]);
        let commits = log.commits_since(None).unwrap();
        assert_eq!(commits[0].hash, "a1");
        assert_eq!(commits[1].hash, "a2");
    }

    #[test]
    fn test_mock_records_created_tags() {
        let log = MockLog::new();
        log.create_tag("v0.2.0").unwrap();
        assert_eq!(log.created_tags(), vec!["v0.2.0".to_string()]);
    }
}
