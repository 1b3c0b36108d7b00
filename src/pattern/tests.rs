use super::*;

fn m(text: &str, pattern: &str) -> bool {
    match_line(text.as_bytes(), pattern).expect("pattern should compile")
}

fn err(pattern: &str) -> MatchError {
    match_line(b"anything", pattern).expect_err("pattern should not compile")
}

#[test]
fn test_single_literal_matches_iff_contained() {
    let texts = ["", "hello", "xyz", "a b c", "héllo", "123"];
    for text in texts {
        for c in ['a', 'e', 'z', ' ', '1', 'é', '!'] {
            assert_eq!(
                m(text, &c.to_string()),
                text.contains(c),
                "text {text:?}, pattern {c:?}"
            );
        }
    }
}

#[test]
fn test_digit() {
    assert!(m("abc123", r"\d"));
    assert!(!m("abcdef", r"\d"));
}

#[test]
fn test_digit_in_other_scripts() {
    assert!(m("٣", r"\d"));
    assert!(m("٣", r"\w"));
    assert!(m("room ४२", r"room \d+$"));
    assert!(!m("½", r"\d"));
}

#[test]
fn test_word() {
    assert!(m("hello!", r"\w"));
    assert!(m("___", r"\w"));
    assert!(!m("@@@@", r"\w"));
}

#[test]
fn test_groups() {
    assert!(m("abc", "[ac]"));
    assert!(m("a", "[ac]"));
    assert!(!m("xyz", "[ab]"));
    assert!(m("apple", "[^xyz]"));
    assert!(m("apple", "[^abc]"));
    assert!(!m("abc", "[^abc]"));
}

#[test]
fn test_one_or_more() {
    assert!(m("aaab", "a+b"));
    assert!(!m("aaa", "a+b"));
    assert!(m("caats", "ca+ts"));
}

#[test]
fn test_zero_or_one() {
    assert!(m("color", "colou?r"));
    assert!(m("colour", "colou?r"));
    assert!(m("act", "ca?t"));
    assert!(!m("dag", "ca?t"));
}

#[test]
fn test_anchors() {
    assert!(m("cat", "^cat$"));
    assert!(!m("a cat", "^cat$"));
    assert!(!m("cats", "^cat$"));
}

#[test]
fn test_alternation() {
    assert!(m("a cat", "a (cat|dog)"));
    assert!(m("a dog", "a (cat|dog)"));
    assert!(!m("a fish", "a (cat|dog)"));
}

#[test]
fn test_anchored_alternation() {
    assert!(m("dog", "^(cat|dog)$"));
    assert!(!m("dogs", "^(cat|dog)$"));
    assert!(m("I see 2 dogs", r"^I see \d+ (cat|dog)s?$"));
    assert!(!m("I see 2 dog cats", r"^I see \d+ (cat|dog)s?$"));
}

#[test]
fn test_nested_alternation() {
    assert!(m("a blue fish", "a ((red|blue) fish|cat)"));
    assert!(m("a cat", "a ((red|blue) fish|cat)"));
    assert!(!m("a green fish", "a ((red|blue) fish|cat)"));
}

#[test]
fn test_quantified_classes() {
    assert!(m("order 12345 shipped", r"\d+ shipped"));
    assert!(m("sally has 3 apples", r"\d [^xyz]+s"));
    assert!(!m("sally has 3 apples", r"\d [^pl]+s"));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    assert!(match_line(b"ab\xffcd", "b.c").unwrap());
    assert!(!match_line(b"ab\xffcd", "bc").unwrap());
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        err("[]"),
        MatchError::Parse(ParseError::EmptyGroup { .. })
    ));
    assert!(matches!(
        err("a[b^c]"),
        MatchError::Parse(ParseError::MisplacedCaret { .. })
    ));
    assert!(matches!(
        err("+abc"),
        MatchError::Parse(ParseError::DanglingQuantifier { .. })
    ));
    assert!(matches!(
        err(r"\x"),
        MatchError::Parse(ParseError::UnknownEscape { escape: 'x', .. })
    ));
}

#[test]
fn test_empty_expression() {
    assert_eq!(err(""), MatchError::EmptyExpression);
    assert_eq!(err("()"), MatchError::EmptyExpression);
    assert_eq!(err("(|a)"), MatchError::EmptyExpression);
}

#[test]
fn test_error_in_any_alternative_fails_compilation() {
    // The first alternative would match, but the second does not parse.
    assert!(matches!(
        match_line(b"cat", "(cat|[])"),
        Err(MatchError::Parse(ParseError::EmptyGroup { .. }))
    ));
}

#[test]
fn test_repeated_calls_agree() {
    for _ in 0..3 {
        assert_eq!(match_line(b"a cat", "a (cat|dog)"), Ok(true));
        assert_eq!(match_line(b"a fish", "a (cat|dog)"), Ok(false));
    }
}

#[test]
fn test_compiled_pattern_reuse() {
    let pattern: Pattern = r"^\d+-(a|b)$".parse().unwrap();
    assert_eq!(pattern.candidates().len(), 2);
    assert_eq!(pattern.to_string(), r"^\d+-(a|b)$");
    assert!(pattern.is_match("42-a"));
    assert!(pattern.is_match("7-b"));
    assert!(!pattern.is_match("7-c"));
    assert!(!pattern.is_match("x7-a"));
}

#[test]
fn test_candidates_render_back_to_syntax() {
    let pattern = Pattern::new(r"^[^ab]+\w?.$").unwrap();
    let rendered: Vec<String> = pattern.candidates()[0]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered, ["^", "[^ab]+", r"\w?", ".", "$"]);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        err(r"a\q").to_string(),
        r"unknown escape '\q' at position 1"
    );
    assert_eq!(
        err("[]").to_string(),
        "empty character group '[]' at position 0"
    );
}

#[test]
fn test_error_positions_refer_to_the_typed_pattern() {
    assert_eq!(
        err(r"(abc|d)\q"),
        MatchError::Parse(ParseError::UnknownEscape {
            escape: 'q',
            position: 7
        })
    );
    assert_eq!(
        err("x(yy|z)[]").to_string(),
        "empty character group '[]' at position 7"
    );
    assert_eq!(
        err("(a|b)c^"),
        MatchError::Parse(ParseError::MisplacedAnchor {
            anchor: '^',
            position: 6
        })
    );
}

#[test]
fn test_wide_alternation_compiles_and_matches() {
    let pattern = "(a|b)".repeat(13);
    let text = format!("x{}a", "ab".repeat(6));
    assert_eq!(match_line(text.as_bytes(), &pattern), Ok(true));
    assert_eq!(match_line(b"ab", &pattern), Ok(false));
}

#[test]
fn test_pattern_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pattern>();
}
