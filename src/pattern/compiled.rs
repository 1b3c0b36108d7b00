//! Compiled patterns: every alternation candidate parsed up front.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::ast::Atom;
use super::error::{MatchError, MatchResult};
use super::expand::expand_with_origins;
use super::matcher::scan;
use super::parser::parse;

/// A pattern compiled into its alternation-free candidate sequences.
///
/// Compilation fails if any candidate fails to parse or is empty, so a
/// `Pattern` can be matched against any text without further errors.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    candidates: Vec<Vec<Atom>>,
}

impl Pattern {
    #[tracing::instrument(level = "trace")]
    pub fn new(pattern: &str) -> MatchResult<Self> {
        let candidates: Vec<Vec<Atom>> = expand_with_origins(pattern)
            .iter()
            .map(|(candidate, origins)| parse(candidate).map_err(|err| err.relocate(origins)))
            .collect::<Result<_, _>>()?;
        if candidates.iter().any(Vec::is_empty) {
            return Err(MatchError::EmptyExpression);
        }
        tracing::debug!(
            pattern,
            candidates = %candidates.iter().map(|atoms| atoms.iter().join("")).join(" | "),
            "compiled pattern"
        );
        Ok(Self {
            source: pattern.to_string(),
            candidates,
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn candidates(&self) -> &[Vec<Atom>] {
        &self.candidates
    }

    /// Whether any candidate matches somewhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.is_match_chars(&chars)
    }

    /// Like [`is_match`](Self::is_match), decoding `text` as UTF-8 with
    /// invalid sequences replaced by U+FFFD.
    pub fn is_match_bytes(&self, text: &[u8]) -> bool {
        self.is_match(&String::from_utf8_lossy(text))
    }

    fn is_match_chars(&self, text: &[char]) -> bool {
        // Candidates are never empty, see `new`.
        self.candidates.iter().any(|atoms| scan(text, atoms))
    }
}

impl FromStr for Pattern {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Test whether `pattern` matches anywhere in `text`.
///
/// `text` is treated as a single line; invalid UTF-8 is replaced with
/// U+FFFD before matching. The pattern is fully compiled before any
/// matching, so a broken alternative is reported even if an earlier one
/// would have matched.
pub fn match_line(text: &[u8], pattern: &str) -> MatchResult<bool> {
    let matched = Pattern::new(pattern)?.is_match_bytes(text);
    tracing::debug!(pattern, matched, "match_line");
    Ok(matched)
}
