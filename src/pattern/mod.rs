//! Pattern compiler and backtracking matching engine.
//!
//! A pattern is first rewritten into alternation-free candidates, each
//! candidate is parsed into a sequence of [`Atom`]s, and a line matches when
//! any candidate matches at some position.
//!
//! # Pattern syntax
//!
//! | Token         | Meaning                                       |
//! |---------------|-----------------------------------------------|
//! | `c`           | The literal character `c`                     |
//! | `.`           | Any one character                             |
//! | `\d`          | One ASCII digit                               |
//! | `\w`          | One letter, digit, or underscore              |
//! | `[abc]`       | One character in the set                      |
//! | `[^abc]`      | One character not in the set                  |
//! | `^`           | Start of line (first in the pattern only)     |
//! | `$`           | End of line (last in the pattern only)        |
//! | `x+`          | One or more `x`, greedy with backtracking     |
//! | `x?`          | Zero or one `x`, greedy                       |
//! | `(a\|b\|c)`   | Alternation, expanded to separate candidates  |

pub mod ast;
pub mod char_class;
mod compiled;
pub mod error;
pub mod expand;
pub mod matcher;
pub mod parser;

#[cfg(test)]
mod tests;

pub use ast::{Atom, CharClass, Quantity};
pub use compiled::{Pattern, match_line};
pub use error::{MatchError, MatchResult, ParseError};
pub use expand::expand;
pub use matcher::{matches_at, search};
pub use parser::parse;
