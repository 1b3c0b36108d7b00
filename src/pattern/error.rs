use thiserror::Error;

/// Errors that can occur while parsing a single alternation-free pattern.
///
/// Positions are character indices into the pattern being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty character group '[]' at position {position}")]
    EmptyGroup { position: usize },
    #[error("'^' at position {position} is only allowed first in a character group")]
    MisplacedCaret { position: usize },
    #[error("quantifier '{quantifier}' at position {position} has nothing to repeat")]
    DanglingQuantifier { quantifier: char, position: usize },
    #[error("unknown escape '\\{escape}' at position {position}")]
    UnknownEscape { escape: char, position: usize },
    #[error("pattern ends with an unfinished escape '\\'")]
    TrailingEscape,
    #[error("character group opened at position {position} is never closed")]
    UnclosedGroup { position: usize },
    #[error("anchor '{anchor}' at position {position} must be at the start ('^') or end ('$') of the pattern")]
    MisplacedAnchor { anchor: char, position: usize },
}

impl ParseError {
    /// Translate positions through `origins`, which maps each character of
    /// the parsed text to its index in the pattern the user wrote.
    pub(crate) fn relocate(self, origins: &[usize]) -> Self {
        let at = |position: usize| origins.get(position).copied().unwrap_or(position);
        match self {
            Self::EmptyGroup { position } => Self::EmptyGroup {
                position: at(position),
            },
            Self::MisplacedCaret { position } => Self::MisplacedCaret {
                position: at(position),
            },
            Self::DanglingQuantifier {
                quantifier,
                position,
            } => Self::DanglingQuantifier {
                quantifier,
                position: at(position),
            },
            Self::UnknownEscape { escape, position } => Self::UnknownEscape {
                escape,
                position: at(position),
            },
            Self::TrailingEscape => Self::TrailingEscape,
            Self::UnclosedGroup { position } => Self::UnclosedGroup {
                position: at(position),
            },
            Self::MisplacedAnchor { anchor, position } => Self::MisplacedAnchor {
                anchor,
                position: at(position),
            },
        }
    }
}

/// Errors returned when compiling or running a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("pattern expands to an empty expression")]
    EmptyExpression,
}

pub type MatchResult<T> = Result<T, MatchError>;
