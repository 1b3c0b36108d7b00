//! Character class membership tests.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use super::ast::CharClass;

/// Test whether `ch` is accepted by `class`.
pub fn class_matches(class: &CharClass, ch: char) -> bool {
    match class {
        CharClass::Literal(c) => *c == ch,
        CharClass::Digit => is_digit(ch),
        CharClass::Word => is_word(ch),
        CharClass::Wildcard => true,
        CharClass::Group { set, negated } => group_matches(set, *negated, ch),
    }
}

/// Decimal digit in any script (general category `Nd`).
pub fn is_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    ch.general_category() == GeneralCategory::DecimalNumber
}

/// Digit, letter (general category `L*`), or underscore.
pub fn is_word(ch: char) -> bool {
    ch == '_' || is_digit(ch) || ch.general_category_group() == GeneralCategoryGroup::Letter
}

/// Membership of `ch` in a character group, inverted when `negated`.
pub fn group_matches(set: &str, negated: bool, ch: char) -> bool {
    let base = set.contains(ch);
    if negated { !base } else { base }
}
