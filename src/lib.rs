pub mod bump;
pub mod changelog;
pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod log;
pub mod record;
pub mod ui;

pub use error::{ReleaseError, Result};
