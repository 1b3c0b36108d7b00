//! Alternation expansion.
//!
//! `(a|b|c)` groups are removed by textual rewriting: each group is replaced
//! by each of its branches in turn, until no balanced parenthesis pair is
//! left. `x(a|b)y(c|d)` therefore expands to `xayc`, `xayd`, `xbyc` and
//! `xbyd`. Every nested or repeated group multiplies the number of
//! candidates.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

/// For each character of a candidate, its character index in the source
/// pattern.
pub(crate) type Origins = Vec<usize>;

/// Expand every parenthesised alternation in `pattern`.
///
/// The result is deduplicated; a pattern without parentheses expands to
/// itself.
pub fn expand(pattern: &str) -> BTreeSet<String> {
    expand_with_origins(pattern).into_keys().collect()
}

/// Like [`expand`], keeping where each candidate character came from.
///
/// When two rewrites produce the same text, the origins of the first are
/// kept.
#[tracing::instrument(level = "trace")]
pub(crate) fn expand_with_origins(pattern: &str) -> BTreeMap<String, Origins> {
    let origins = (0..pattern.chars().count()).collect();
    let mut current = BTreeMap::from([(pattern.to_string(), origins)]);
    while let Some(next) = expand_pass(&current) {
        current = next;
    }
    tracing::trace!(candidates = current.len(), "alternation expanded");
    current
}

/// Rewrite the first group of every candidate in `current`. Returns `None`
/// once no candidate contains a group.
fn expand_pass(current: &BTreeMap<String, Origins>) -> Option<BTreeMap<String, Origins>> {
    let spans = current
        .iter()
        .map(|(text, origins)| (text, origins, first_group(text)))
        .collect_vec();
    if spans.iter().all(|(_, _, span)| span.is_none()) {
        return None;
    }

    let mut next = BTreeMap::new();
    for (text, origins, span) in spans {
        match span {
            Some(span) => {
                for (branch, branch_origins) in substitute(text, origins, span) {
                    next.entry(branch).or_insert(branch_origins);
                }
            }
            None => {
                next.entry(text.clone()).or_insert_with(|| origins.clone());
            }
        }
    }
    Some(next)
}

/// Character indices of the `(` and `)` of the group closed by the first
/// `)` that has a matching `(`.
fn first_group(text: &str) -> Option<(usize, usize)> {
    let mut open = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        match c {
            '(' => open.push(idx),
            ')' => {
                if let Some(start) = open.pop() {
                    return Some((start, idx));
                }
            }
            _ => {}
        }
    }
    None
}

/// One rewritten candidate per `|`-separated branch of the group.
fn substitute(
    text: &str,
    origins: &[usize],
    (open, close): (usize, usize),
) -> Vec<(String, Origins)> {
    let chars = text.chars().collect_vec();
    let mut branches = Vec::new();
    let mut start = open + 1;

    for idx in open + 1..=close {
        if idx < close && chars[idx] != '|' {
            continue;
        }
        let kept = (0..open).chain(start..idx).chain(close + 1..chars.len());
        branches.push(kept.map(|i| (chars[i], origins[i])).unzip());
        start = idx + 1;
    }
    branches
}
