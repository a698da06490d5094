use git2::Repository;

use crate::domain::{RawCommit, Version};
use crate::error::{ReleaseError, Result};
use crate::log::CommitLog;

/// Commit-log reader backed by a real git repository via `git2`
pub struct Git2Log {
    repo: Repository,
}

impl Git2Log {
    /// Discover the repository from the current working directory
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")
            .map_err(|e| ReleaseError::config(format!("not in a git repository: {}", e)))?;
        Ok(Git2Log { repo })
    }

    /// Open a repository at an explicit path
    pub fn open(path: &str) -> Result<Self> {
        let repo = Repository::open(path)?;
        Ok(Git2Log { repo })
    }

    fn short_hash(oid: git2::Oid) -> String {
        let full = oid.to_string();
        if full.len() > 7 {
            full[..7].to_string()
        } else {
            full
        }
    }
}

impl CommitLog for Git2Log {
    fn latest_version_tag(&self, prefix: &str) -> Result<Option<String>> {
        let names = self.repo.tag_names(None)?;
        let mut best: Option<(Version, String)> = None;

        for name in names.iter().flatten() {
            let Some(rest) = name.strip_prefix(prefix) else {
                continue;
            };
            let Ok(version) = Version::parse(rest) else {
                continue;
            };
            match &best {
                Some((current, _)) if *current >= version => {}
                _ => best = Some((version, name.to_string())),
            }
        }

        Ok(best.map(|(_, name)| name))
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        if let Some(tag) = tag {
            let target = self.repo.revparse_single(tag)?.peel_to_commit()?;
            revwalk.hide(target.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(RawCommit {
                hash: Self::short_hash(oid),
                subject: commit.summary().unwrap_or("").trim().to_string(),
                body: commit.body().unwrap_or("").trim().to_string(),
            });
        }

        // Revwalk yields newest first; the pipeline consumes oldest first.
        commits.reverse();
        Ok(commits)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| ReleaseError::tag(format!("failed to create '{}': {}", name, e)))?;
        Ok(())
    }
}
