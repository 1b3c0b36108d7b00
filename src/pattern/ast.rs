//! Compiled atom types for patterns.

use std::fmt;

/// One compiled unit of a pattern.
///
/// Anchors are zero-width and carry no quantity. Every other atom matches a
/// single input character, possibly repeated according to its [`Quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// `^` — only valid as the first atom of a sequence.
    StartAnchor,
    /// `$` — only valid as the last atom of a sequence.
    EndAnchor,
    Class { class: CharClass, quantity: Quantity },
}

impl Atom {
    pub fn single(class: CharClass) -> Self {
        Atom::Class {
            class,
            quantity: Quantity::Exactly1,
        }
    }

    /// The atom's repetition, or `None` for anchors.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            Atom::Class { quantity, .. } => Some(*quantity),
            Atom::StartAnchor | Atom::EndAnchor => None,
        }
    }
}

/// What a single non-anchor atom accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Literal(char),
    Digit,    // \d
    Word,     // \w
    Wildcard, // .
    /// `[abc]` or, when `negated`, `[^abc]`. `set` is never empty.
    Group { set: String, negated: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantity {
    #[default]
    Exactly1,
    OneOrMore, // +
    ZeroOrOne, // ?
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::StartAnchor => write!(f, "^"),
            Atom::EndAnchor => write!(f, "$"),
            Atom::Class { class, quantity } => write!(f, "{class}{quantity}"),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Literal(c) => write!(f, "{c}"),
            CharClass::Digit => write!(f, "\\d"),
            CharClass::Word => write!(f, "\\w"),
            CharClass::Wildcard => write!(f, "."),
            CharClass::Group { set, negated } => {
                write!(f, "[{}{set}]", if *negated { "^" } else { "" })
            }
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Exactly1 => Ok(()),
            Quantity::OneOrMore => write!(f, "+"),
            Quantity::ZeroOrOne => write!(f, "?"),
        }
    }
}
