//! Single-pass parser for alternation-free pattern strings.

use std::iter::{Enumerate, Peekable};
use std::str::Chars;

use phf::{Map, phf_map};

use super::ast::*;
use super::error::ParseError;

/// Classes reachable through `\x` escapes.
const ESCAPE_CLASSES: Map<char, CharClass> = phf_map! {
    'd' => CharClass::Digit,
    'w' => CharClass::Word,
};

/// Parse an alternation-free pattern into its atom sequence.
///
/// Parentheses and `|` have no special meaning here; alternation is removed
/// beforehand by [`expand`](super::expand::expand). An empty pattern yields
/// an empty sequence.
#[tracing::instrument(level = "trace")]
pub fn parse(pattern: &str) -> Result<Vec<Atom>, ParseError> {
    Parser {
        chars: pattern.chars().enumerate().peekable(),
        atoms: Vec::new(),
    }
    .parse_sequence()
}

struct Parser<'a> {
    chars: Peekable<Enumerate<Chars<'a>>>,
    atoms: Vec<Atom>,
}

impl Parser<'_> {
    fn parse_sequence(mut self) -> Result<Vec<Atom>, ParseError> {
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '\\' => {
                    let class = self.parse_escape(pos)?;
                    self.atoms.push(Atom::single(class));
                }
                '[' => {
                    let class = self.parse_group(pos)?;
                    self.atoms.push(Atom::single(class));
                }
                '^' => {
                    if !self.atoms.is_empty() {
                        return Err(ParseError::MisplacedAnchor {
                            anchor: c,
                            position: pos,
                        });
                    }
                    self.atoms.push(Atom::StartAnchor);
                }
                '$' => {
                    if self.chars.peek().is_some() {
                        return Err(ParseError::MisplacedAnchor {
                            anchor: c,
                            position: pos,
                        });
                    }
                    self.atoms.push(Atom::EndAnchor);
                }
                '+' => self.quantify(Quantity::OneOrMore, c, pos)?,
                '?' => self.quantify(Quantity::ZeroOrOne, c, pos)?,
                '.' => self.atoms.push(Atom::single(CharClass::Wildcard)),
                _ => self.atoms.push(Atom::single(CharClass::Literal(c))),
            }
        }
        Ok(self.atoms)
    }

    /// Apply a postfix quantifier to the previous atom. A second quantifier
    /// replaces the first.
    fn quantify(&mut self, to: Quantity, quantifier: char, pos: usize) -> Result<(), ParseError> {
        match self.atoms.last_mut() {
            Some(Atom::Class { quantity, .. }) => {
                *quantity = to;
                Ok(())
            }
            _ => Err(ParseError::DanglingQuantifier {
                quantifier,
                position: pos,
            }),
        }
    }

    /// Parse the character after a `\` (the `\` at `start` has been consumed).
    fn parse_escape(&mut self, start: usize) -> Result<CharClass, ParseError> {
        let (_, c) = self.chars.next().ok_or(ParseError::TrailingEscape)?;
        ESCAPE_CLASSES
            .get(&c)
            .cloned()
            .ok_or(ParseError::UnknownEscape {
                escape: c,
                position: start,
            })
    }

    /// Parse a `[...]` group (the `[` at `open` has been consumed).
    ///
    /// Everything up to the closing `]` is taken literally. A leading `^`
    /// negates the group; a `^` anywhere else is an error.
    fn parse_group(&mut self, open: usize) -> Result<CharClass, ParseError> {
        let mut set = String::new();
        let mut negated = false;
        let mut first = true;

        loop {
            match self.chars.next() {
                None => return Err(ParseError::UnclosedGroup { position: open }),
                Some((_, ']')) => break,
                Some((_, '^')) if first => negated = true,
                Some((pos, '^')) => return Err(ParseError::MisplacedCaret { position: pos }),
                Some((_, c)) => set.push(c),
            }
            first = false;
        }

        // `[^]` has nothing left to test against either.
        if set.is_empty() {
            return Err(ParseError::EmptyGroup { position: open });
        }
        Ok(CharClass::Group { set, negated })
    }
}
