use regex::Regex;

/// Marker opening a breaking-change footer paragraph.
///
/// The marker is the full 17-character prefix including the trailing space;
/// footer content starts immediately after it.
pub const BREAKING_MARKER: &str = "BREAKING CHANGE: ";

/// One commit as delivered by the log reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub hash: String,
    pub subject: String,
    pub body: String,
}

impl RawCommit {
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        RawCommit {
            hash: hash.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// The literal `initial commit` subject is carved out of classification
    /// entirely: valid record, no bucket, no breaking entries.
    pub fn is_initial_commit(&self) -> bool {
        self.subject == "initial commit"
    }
}

/// Parsed representation of a conventional commit subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub hash: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub description: String,
    pub breaking_inline: bool,
}

impl ParsedCommit {
    /// Parse a commit subject according to conventional commits.
    /// Supported forms:
    /// - type(scope)!: description
    /// - type(scope): description
    /// - type!: description
    /// - type: description
    /// - anything else (kept as type with empty description, never an error)
    ///
    /// The description keeps no interior whitespace at all; category listings
    /// render it in compact form.
    pub fn parse(raw: &RawCommit) -> Self {
        let subject = raw.subject.as_str();

        // Scope is only recognized when the ')' sits immediately before the
        // (optionally '!'-marked) ':'.
        if let Some(captures) = Regex::new(r"^([^:(]*)\(([^)]*)\)(!?):(.*)$")
            .ok()
            .and_then(|re| re.captures(subject))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let scope = captures.get(2).map(|m| m.as_str().to_string());
            let breaking_inline = captures.get(3).map(|m| m.as_str()) == Some("!");
            let description = captures
                .get(4)
                .map(|m| compact_whitespace(m.as_str()))
                .unwrap_or_default();

            return ParsedCommit {
                hash: raw.hash.clone(),
                r#type,
                scope,
                description,
                breaking_inline,
            };
        }

        // No scope: split on the first ':'; a '!' right before it flags an
        // inline breaking change and is not part of the type.
        if let Some((head, rest)) = subject.split_once(':') {
            let (r#type, breaking_inline) = match head.strip_suffix('!') {
                Some(stripped) if !stripped.is_empty() => (stripped.to_string(), true),
                _ => (head.to_string(), false),
            };

            return ParsedCommit {
                hash: raw.hash.clone(),
                r#type,
                scope: None,
                description: compact_whitespace(rest),
                breaking_inline,
            };
        }

        // No ':' at all: the whole subject is the type. This is not an
        // error; the commit falls through to the unrecognized-type path.
        ParsedCommit {
            hash: raw.hash.clone(),
            r#type: subject.to_string(),
            scope: None,
            description: String::new(),
            breaking_inline: false,
        }
    }
}

/// Extract breaking-change footer contents from a commit body.
///
/// Paragraphs are blank-line separated; internal line breaks collapse to
/// single spaces before the marker check. Multiple matching paragraphs in
/// one body all count, never deduplicated.
pub fn breaking_change_footers(body: &str) -> Vec<String> {
    body.split("\n\n")
        .filter_map(|paragraph| {
            let collapsed = paragraph
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            collapsed.strip_prefix(BREAKING_MARKER).map(str::to_string)
        })
        .collect()
}

fn compact_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}
