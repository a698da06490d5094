//! Changelog fragment rendering.
//!
//! Pure derivation from the classified buckets and the release decision;
//! rendering the same inputs twice yields byte-identical text. Merging the
//! fragment into a changelog file is the caller's concern.

use crate::bump::ReleaseDecision;
use crate::classify::{Category, ClassificationResult};
use crate::config::RepositoryConfig;

/// One rendered changelog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogSection {
    pub title: String,
    pub lines: Vec<String>,
}

/// Ordered markdown fragment for one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogFragment {
    pub heading: String,
    pub sections: Vec<ChangelogSection>,
}

impl ChangelogFragment {
    /// Render the fragment as markdown text.
    ///
    /// An empty section list means the first release; it renders the
    /// initial-commit placeholder instead of category sections.
    pub fn render(&self) -> String {
        let mut out = format!("## {}\n", self.heading);

        if self.sections.is_empty() {
            out.push_str("\n* initial commit\n");
            return out;
        }

        for section in &self.sections {
            out.push_str(&format!("\n### {}\n\n", section.title));
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        out
    }
}

/// Build the changelog fragment for a release decision.
///
/// Sections appear in fixed display order and only when their bucket is
/// non-empty. Category entries carry a commit permalink; breaking entries
/// carry none (they have no hash in this model).
pub fn build_fragment(
    result: &ClassificationResult,
    decision: &ReleaseDecision,
    repository: &RepositoryConfig,
) -> ChangelogFragment {
    let heading = decision.next_version.to_string();

    if decision.is_first_release {
        return ChangelogFragment {
            heading,
            sections: Vec::new(),
        };
    }

    let mut sections = Vec::new();

    if result.has_breaking() {
        let lines = result
            .breaking()
            .iter()
            .map(|entry| match &entry.scope {
                Some(scope) => format!("* {}: {}", scope, entry.content),
                None => format!("* {}", entry.content),
            })
            .collect();
        sections.push(ChangelogSection {
            title: "Breaking Changes".to_string(),
            lines,
        });
    }

    for category in Category::ALL {
        let bucket = result.bucket(category);
        if bucket.is_empty() {
            continue;
        }

        let lines = bucket
            .iter()
            .map(|entry| {
                let link = format!("([#{}]({}))", entry.hash, repository.commit_url(&entry.hash));
                match &entry.scope {
                    Some(scope) => format!("* {}: {} {}", scope, entry.description, link),
                    None => format!("* {} {}", entry.description, link),
                }
            })
            .collect();

        sections.push(ChangelogSection {
            title: category.title().to_string(),
            lines,
        });
    }

    ChangelogFragment { heading, sections }
}
