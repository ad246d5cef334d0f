//! Pattern values
//!
//! A compiled regular expression together with the flag letters it was
//! declared with. Patterns are immutable and compared by source and flags.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{GraphError, GraphResult};

/// Immutable pattern-matching value.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    flags: String,
}

impl Pattern {
    /// Compile `source` with no flags.
    pub fn new(source: &str) -> GraphResult<Self> {
        Self::with_flags(source, "")
    }

    /// Compile `source` with JavaScript-style flag letters.
    ///
    /// `i`, `m`, `s` and `x` change matching; `g`, `u`, `y` and `d` are kept
    /// for display only. Any other letter is rejected.
    pub fn with_flags(source: &str, flags: &str) -> GraphResult<Self> {
        let mut builder = RegexBuilder::new(source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                'g' | 'u' | 'y' | 'd' => {}
                other => return Err(GraphError::UnsupportedFlag(other)),
            }
        }
        let regex = builder.build().map_err(|reason| GraphError::InvalidPattern {
            source_text: source.to_string(),
            reason,
        })?;
        Ok(Pattern {
            regex,
            flags: flags.to_string(),
        })
    }

    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source() && self.flags == other.flags
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags)
    }
}
