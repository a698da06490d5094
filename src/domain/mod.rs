//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod version;

pub use commit::{ParsedCommit, RawCommit};
pub use version::Version;
