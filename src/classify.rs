//! Commit classification into change-category buckets.
//!
//! The classifier folds over the commit sequence and returns a
//! [ClassificationResult] owned by the invocation; there is no shared or
//! process-wide accumulator state.

use std::collections::BTreeMap;

use crate::domain::commit::{breaking_change_footers, ParsedCommit, RawCommit};

/// Recognized change categories, declared in changelog display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Feat,
    Fix,
    Perf,
    Ci,
    Docs,
    Style,
    Chore,
    Refactor,
    Test,
    Build,
    Revert,
}

impl Category {
    /// All categories in changelog display order
    pub const ALL: [Category; 11] = [
        Category::Feat,
        Category::Fix,
        Category::Perf,
        Category::Ci,
        Category::Docs,
        Category::Style,
        Category::Chore,
        Category::Refactor,
        Category::Test,
        Category::Build,
        Category::Revert,
    ];

    /// Map a commit type to its category. Case-sensitive exact match;
    /// anything else is unrecognized.
    pub fn from_type(commit_type: &str) -> Option<Category> {
        match commit_type {
            "feat" => Some(Category::Feat),
            "fix" => Some(Category::Fix),
            "perf" => Some(Category::Perf),
            "ci" => Some(Category::Ci),
            "docs" => Some(Category::Docs),
            "style" => Some(Category::Style),
            "chore" => Some(Category::Chore),
            "refactor" => Some(Category::Refactor),
            "test" => Some(Category::Test),
            "build" => Some(Category::Build),
            "revert" => Some(Category::Revert),
            _ => None,
        }
    }

    /// Changelog section title for this category
    pub fn title(&self) -> &'static str {
        match self {
            Category::Feat => "Features",
            Category::Fix => "Bug Fixes",
            Category::Perf => "Performance Improvements",
            Category::Ci => "Continuous Integration",
            Category::Docs => "Documentation",
            Category::Style => "Styles",
            Category::Chore => "Chores",
            Category::Refactor => "Code Refactoring",
            Category::Test => "Tests",
            Category::Build => "Build",
            Category::Revert => "Reverts",
        }
    }
}

/// One classified commit inside a category bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub scope: Option<String>,
    pub description: String,
    pub hash: String,
}

/// One breaking change, from an inline '!' marker or a body footer.
/// Carries no commit hash; breaking entries render without a permalink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakingEntry {
    pub scope: Option<String>,
    pub content: String,
}

/// A commit whose type matched no category. Surfaced for logging, never an
/// error, and never version-impacting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedCommit {
    pub hash: String,
    pub r#type: String,
}

/// Everything one classification pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    buckets: BTreeMap<Category, Vec<ChangeEntry>>,
    breaking: Vec<BreakingEntry>,
    unrecognized: Vec<UnrecognizedCommit>,
}

impl ClassificationResult {
    /// Entries for one category, in commit processing order
    pub fn bucket(&self, category: Category) -> &[ChangeEntry] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn breaking(&self) -> &[BreakingEntry] {
        &self.breaking
    }

    pub fn unrecognized(&self) -> &[UnrecognizedCommit] {
        &self.unrecognized
    }

    pub fn has(&self, category: Category) -> bool {
        !self.bucket(category).is_empty()
    }

    pub fn has_breaking(&self) -> bool {
        !self.breaking.is_empty()
    }

    /// Per-bucket counts in display order, breaking bucket first.
    /// Used for the audit report on the no-release path.
    pub fn bucket_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts = vec![("Breaking Changes", self.breaking.len())];
        for category in Category::ALL {
            counts.push((category.title(), self.bucket(category).len()));
        }
        counts
    }

    fn push(&mut self, category: Category, entry: ChangeEntry) {
        self.buckets.entry(category).or_default().push(entry);
    }
}

/// Classify a commit sequence into category buckets.
///
/// Each commit lands in at most one type bucket; inline breaking markers and
/// body footers independently append breaking entries, cumulatively. The
/// literal `initial commit` subject contributes nothing at all.
pub fn classify(commits: &[RawCommit]) -> ClassificationResult {
    let mut result = ClassificationResult::default();

    for raw in commits {
        if raw.is_initial_commit() {
            continue;
        }

        let parsed = ParsedCommit::parse(raw);

        match Category::from_type(&parsed.r#type) {
            Some(category) => {
                result.push(
                    category,
                    ChangeEntry {
                        scope: parsed.scope.clone(),
                        description: parsed.description.clone(),
                        hash: parsed.hash.clone(),
                    },
                );
            }
            None => {
                result.unrecognized.push(UnrecognizedCommit {
                    hash: parsed.hash.clone(),
                    r#type: parsed.r#type.clone(),
                });
            }
        }

        if parsed.breaking_inline {
            result.breaking.push(BreakingEntry {
                scope: parsed.scope.clone(),
                content: parsed.description.clone(),
            });
        }

        for content in breaking_change_footers(&raw.body) {
            result.breaking.push(BreakingEntry {
                scope: parsed.scope.clone(),
                content,
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(hash: &str, subject: &str, body: &str) -> RawCommit {
        RawCommit::new(hash, subject, body)
    }

    #[test]
    fn test_classify_routes_types_to_buckets() {
        let commits = vec![
            raw("a1", "feat(api): add endpoint", ""),
            raw("a2", "fix: squash bug", ""),
            raw("a3", "docs: update readme", ""),
        ];
        let result = classify(&commits);

        assert_eq!(result.bucket(Category::Feat).len(), 1);
        assert_eq!(result.bucket(Category::Fix).len(), 1);
        assert_eq!(result.bucket(Category::Docs).len(), 1);
        assert_eq!(result.bucket(Category::Feat)[0].scope, Some("api".into()));
        assert_eq!(result.bucket(Category::Feat)[0].hash, "a1");
    }

    #[test]
    fn test_classify_preserves_processing_order() {
        let commits = vec![
            raw("a1", "fix: first", ""),
            raw("a2", "fix: second", ""),
            raw("a3", "fix: third", ""),
        ];
        let result = classify(&commits);
        let hashes: Vec<_> = result
            .bucket(Category::Fix)
            .iter()
            .map(|e| e.hash.as_str())
            .collect();
        assert_eq!(hashes, vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn test_classify_type_match_is_case_sensitive() {
        let result = classify(&[raw("a1", "Feat: loud", "")]);
        assert!(!result.has(Category::Feat));
        assert_eq!(result.unrecognized().len(), 1);
        assert_eq!(result.unrecognized()[0].r#type, "Feat");
    }

    #[test]
    fn test_classify_unrecognized_is_observation_not_error() {
        let result = classify(&[raw("a1", "wip: later", "")]);
        for category in Category::ALL {
            assert!(!result.has(category));
        }
        assert_eq!(result.unrecognized().len(), 1);
        assert_eq!(result.unrecognized()[0].hash, "a1");
    }

    #[test]
    fn test_classify_inline_breaking_lands_in_both() {
        let result = classify(&[raw("a1", "feat!: drop X", "")]);
        assert!(result.has(Category::Feat));
        assert_eq!(result.breaking().len(), 1);
        assert_eq!(result.breaking()[0].content, "dropX");
    }

    #[test]
    fn test_classify_footer_breaking_tagged_with_scope() {
        let result = classify(&[raw(
            "a1",
            "fix(api): adjust",
            "BREAKING CHANGE: remove Y",
        )]);
        assert_eq!(result.breaking().len(), 1);
        assert_eq!(result.breaking()[0].scope, Some("api".into()));
        assert_eq!(result.breaking()[0].content, "remove Y");
    }

    #[test]
    fn test_classify_inline_and_footer_are_cumulative() {
        let result = classify(&[raw(
            "a1",
            "feat(core)!: rework",
            "BREAKING CHANGE: one\n\nBREAKING CHANGE: two",
        )]);
        assert_eq!(result.breaking().len(), 3);
        assert_eq!(result.bucket(Category::Feat).len(), 1);
    }

    #[test]
    fn test_classify_skips_initial_commit() {
        let result = classify(&[raw("a1", "initial commit", "BREAKING CHANGE: nope")]);
        for category in Category::ALL {
            assert!(!result.has(category));
        }
        assert!(!result.has_breaking());
        assert!(result.unrecognized().is_empty());
    }

    #[test]
    fn test_bucket_counts_cover_every_bucket() {
        let result = classify(&[raw("a1", "feat: x", ""), raw("a2", "feat!: y", "")]);
        let counts = result.bucket_counts();
        assert_eq!(counts.len(), 12);
        assert_eq!(counts[0], ("Breaking Changes", 1));
        assert!(counts.contains(&("Features", 2)));
        assert!(counts.contains(&("Reverts", 0)));
    }
}
