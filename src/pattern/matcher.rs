//! Backtracking matcher for a single candidate atom sequence.
//!
//! All positions are **character** (not byte) indices into the text.

use super::ast::{Atom, Quantity};
use super::char_class::class_matches;
use super::error::MatchError;

/// Search for `atoms` anywhere in `text`.
///
/// A sequence starting with [`Atom::StartAnchor`] is only tried at position
/// 0; otherwise every start position up to and including `text.len()` is
/// tried in order.
pub fn search(text: &[char], atoms: &[Atom]) -> Result<bool, MatchError> {
    if atoms.is_empty() {
        return Err(MatchError::EmptyExpression);
    }
    Ok(scan(text, atoms))
}

/// [`search`] for a sequence already known to be non-empty.
pub(crate) fn scan(text: &[char], atoms: &[Atom]) -> bool {
    match atoms.split_first() {
        Some((Atom::StartAnchor, rest)) => matches_at(text, 0, rest),
        _ => (0..=text.len()).any(|offset| matches_at(text, offset, atoms)),
    }
}

/// Test whether `atoms` matches starting exactly at `offset`.
///
/// `+` atoms are greedy: the longest run is tried first, then shortened one
/// character at a time until the rest of the sequence matches. `?` atoms
/// consume a matching character when there is one and are never revisited.
pub fn matches_at(text: &[char], offset: usize, atoms: &[Atom]) -> bool {
    let mut pos = offset;

    for (idx, atom) in atoms.iter().enumerate() {
        if *atom == Atom::EndAnchor && idx + 1 == atoms.len() {
            return pos == text.len();
        }
        let Some(&ch) = text.get(pos) else {
            return atoms[idx..].iter().all(|rest| holds_at_end(rest, pos));
        };

        let (class, quantity) = match atom {
            Atom::StartAnchor => {
                if pos != 0 {
                    return false;
                }
                continue;
            }
            // Only reachable when `$` is not the last atom.
            Atom::EndAnchor => return false,
            Atom::Class { class, quantity } => (class, *quantity),
        };

        match quantity {
            Quantity::Exactly1 => {
                if !class_matches(class, ch) {
                    return false;
                }
                pos += 1;
            }
            Quantity::ZeroOrOne => {
                if class_matches(class, ch) {
                    pos += 1;
                }
            }
            Quantity::OneOrMore => {
                if !class_matches(class, ch) {
                    return false;
                }
                let run = text[pos..]
                    .iter()
                    .take_while(|&&c| class_matches(class, c))
                    .count();
                let rest = &atoms[idx + 1..];
                return (pos + 1..=pos + run)
                    .rev()
                    .any(|split| matches_at(text, split, rest));
            }
        }
    }
    true
}

/// Whether `atom` can succeed without consuming input at the end of the
/// text, which is at position `pos`.
fn holds_at_end(atom: &Atom, pos: usize) -> bool {
    match atom {
        Atom::StartAnchor => pos == 0,
        Atom::EndAnchor => true,
        Atom::Class { quantity, .. } => *quantity == Quantity::ZeroOrOne,
    }
}
