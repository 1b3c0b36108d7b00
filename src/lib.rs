//! A minimal regular-expression engine backing a `grep -E` style line filter.
//!
//! Patterns support literals, `.`, `\d`, `\w`, `[...]` / `[^...]` groups,
//! `^` / `$` anchors, the `+` and `?` quantifiers, and `(a|b)` alternation.
//! See [`pattern`] for the full syntax.
//!
//! # Example
//!
//! ```rust
//! use mygrep::{MatchError, ParseError, Pattern, match_line};
//!
//! assert_eq!(match_line(b"a cat", "a (cat|dog)"), Ok(true));
//! assert_eq!(match_line(b"aaa", "a+b"), Ok(false));
//!
//! let pattern = Pattern::new(r"^\d+ apples?$").unwrap();
//! assert!(pattern.is_match("3 apples"));
//! assert!(!pattern.is_match("no apples"));
//!
//! assert!(matches!(
//!     match_line(b"text", "[]"),
//!     Err(MatchError::Parse(ParseError::EmptyGroup { .. }))
//! ));
//! ```

pub mod pattern;

pub use pattern::{Atom, CharClass, MatchError, ParseError, Pattern, Quantity, match_line};
