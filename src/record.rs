//! Decoder for the delimited commit-log transport.
//!
//! Each record carries hash, subject, and body separated by U+001F and is
//! terminated by U+001E, matching `git log --format='%H%x1f%s%x1f%b%x1e'`.
//! This is the single place transport text becomes typed [RawCommit]s;
//! nothing downstream re-splits delimiters.

use crate::domain::RawCommit;
use crate::error::{ReleaseError, Result};

/// Field separator inside one record (U+001F, unit separator)
pub const FIELD_SEP: char = '\u{1f}';

/// Record terminator (U+001E, record separator)
pub const RECORD_SEP: char = '\u{1e}';

/// `git log` format string producing the transport this decoder reads
pub const GIT_LOG_FORMAT: &str = "%H%x1f%s%x1f%b%x1e";

/// Decode a transport stream into raw commits, preserving record order.
///
/// Every field is trimmed. A record whose hash is empty after trimming is
/// rejected with `MalformedRecord` and aborts the whole decode; a missing
/// hash would make every downstream permalink meaningless.
pub fn decode_records(stream: &str) -> Result<Vec<RawCommit>> {
    let mut commits = Vec::new();

    for record in stream.split(RECORD_SEP) {
        if record.trim().is_empty() {
            continue;
        }

        let mut fields = record.splitn(3, FIELD_SEP);
        let hash = fields.next().unwrap_or("").trim().to_string();
        let subject = fields.next().unwrap_or("").trim().to_string();
        let body = fields.next().unwrap_or("").trim().to_string();

        if hash.is_empty() {
            return Err(ReleaseError::malformed_record(format!(
                "record with empty hash (subject: '{}')",
                subject
            )));
        }

        commits.push(RawCommit {
            hash,
            subject,
            body,
        });
    }

    Ok(commits)
}
