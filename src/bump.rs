//! Version bump decision table.
//!
//! Reduces the classified buckets plus the optional prior version into the
//! next-version decision. Priority order is fixed: first release, breaking,
//! feature/performance, fix, then the terminal no-release outcome.

use crate::classify::{Category, ClassificationResult};
use crate::domain::Version;

/// Terminal output of a successful bump calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub next_version: Version,
    pub is_prerelease: bool,
    pub is_first_release: bool,
}

/// Outcome of the decision table. `NoRelease` is a deliberate terminal
/// state, not a failure: the caller stops the pipeline without error and
/// reports bucket counts for the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpDecision {
    Release(ReleaseDecision),
    NoRelease { version: Version },
}

/// Evaluate the decision table against the classified buckets.
///
/// `prior` is the already-parsed previous release version; `None` signals
/// the very first release, which short-circuits everything else.
pub fn decide(prior: Option<Version>, result: &ClassificationResult) -> BumpDecision {
    let prior = match prior {
        Some(version) => version,
        None => {
            return BumpDecision::Release(ReleaseDecision {
                next_version: Version::new(0, 1, 0),
                is_prerelease: true,
                is_first_release: true,
            });
        }
    };

    if result.has_breaking() {
        return BumpDecision::Release(ReleaseDecision {
            next_version: prior.next_major(),
            is_prerelease: false,
            is_first_release: false,
        });
    }

    if result.has(Category::Feat) || result.has(Category::Perf) {
        let next = prior.next_minor();
        return BumpDecision::Release(ReleaseDecision {
            next_version: next,
            is_prerelease: next.major == 0,
            is_first_release: false,
        });
    }

    if result.has(Category::Fix) {
        let next = prior.next_patch();
        return BumpDecision::Release(ReleaseDecision {
            next_version: next,
            is_prerelease: next.major == 0,
            is_first_release: false,
        });
    }

    BumpDecision::NoRelease { version: prior }
}
