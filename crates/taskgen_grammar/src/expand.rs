//! Group expansion.
//!
//! Every `( ... )` group in an alternative becomes a synthetic `parent_N` rule
//! whose alternatives are the group's top-level `|` branches, and the group is
//! replaced by a reference to it. New rules join the worklist, so nested
//! groups are expanded until no rule contains a group.
//!
//! All scanning skips backslash escapes and the contents of `{...}` wildcard
//! markers.

use std::collections::VecDeque;

use crate::rules::RuleSet;

/// Yields `(offset, byte)` for each unescaped byte outside wildcard braces.
fn structural_bytes(text: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut braces = 0usize;
    std::iter::from_fn(move || {
        while i < bytes.len() {
            let at = i;
            let b = bytes[i];
            i += 1;
            match b {
                b'\\' => i += 1,
                b'{' => braces += 1,
                b'}' => braces = braces.saturating_sub(1),
                _ if braces == 0 => return Some((at, b)),
                _ => {}
            }
        }
        None
    })
}

/// Splits `text` on `|` outside parentheses.
pub(crate) fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, b) in structural_bytes(text) {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Returns a description of the first paren imbalance, if any.
pub(crate) fn check_balanced(text: &str) -> Option<&'static str> {
    let mut depth = 0usize;
    for (_, b) in structural_bytes(text) {
        match b {
            b'(' => depth += 1,
            b')' if depth == 0 => return Some("unmatched ')'"),
            b')' => depth -= 1,
            _ => {}
        }
    }
    (depth > 0).then_some("unclosed '('")
}

/// Returns the offset of the `)` closing the `(` at `open`.
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in structural_bytes(&text[open..]) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Characters that may continue a non-terminal name.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expands every group in `rules` and unescapes `\(`, `\)` and `\|`.
///
/// Group text must already be balanced. Returns the number of synthetic
/// rules created.
pub(crate) fn expand_groups(rules: &mut RuleSet) -> usize {
    let mut queue: VecDeque<String> = rules.names().map(String::from).collect();
    let mut next_id = 1;
    let mut created = 0;

    while let Some(name) = queue.pop_front() {
        let Some(alternatives) = rules.get(&name).map(<[String]>::to_vec) else {
            continue;
        };
        let mut expanded: Vec<String> = Vec::with_capacity(alternatives.len());
        for alternative in &alternatives {
            for piece in unwrap_redundant(alternative) {
                let text = extract_groups(&piece, rules, &mut next_id, &mut queue, &mut created);
                if !expanded.contains(&text) {
                    expanded.push(text);
                }
            }
        }
        rules.replace(&name, expanded);
    }

    let names: Vec<String> = rules.names().map(String::from).collect();
    for name in names {
        if let Some(alternatives) = rules.get(&name) {
            let unescaped = alternatives.iter().map(|alt| unescape(alt)).collect();
            rules.replace(&name, unescaped);
        }
    }
    created
}

/// Strips a pair of parentheses wrapping the whole alternative and re-splits
/// what was inside.
fn unwrap_redundant(alternative: &str) -> Vec<String> {
    let trimmed = alternative.trim();
    if trimmed.starts_with('(') && matching_paren(trimmed, 0) == Some(trimmed.len() - 1) {
        return split_top_level(&trimmed[1..trimmed.len() - 1])
            .into_iter()
            .flat_map(unwrap_redundant)
            .collect();
    }
    vec![trimmed.to_string()]
}

/// Replaces each top-level group in `text` with a reference to a new rule.
fn extract_groups(
    text: &str,
    rules: &mut RuleSet,
    next_id: &mut usize,
    queue: &mut VecDeque<String>,
    created: &mut usize,
) -> String {
    let mut text = text.to_string();
    let mut from = 0;

    loop {
        let found = structural_bytes(&text[from..])
            .find(|&(_, b)| b == b'(')
            .map(|(i, _)| from + i);
        let Some(open) = found else {
            break;
        };
        let Some(close) = matching_paren(&text, open) else {
            break;
        };
        let alternatives: Vec<String> = split_top_level(&text[open + 1..close])
            .into_iter()
            .map(|alt| alt.trim().to_string())
            .collect();

        let name = fresh_name(rules, next_id);
        rules.add(&name, alternatives);
        queue.push_back(name.clone());
        *created += 1;

        let glued = text[close + 1..].chars().next().is_some_and(is_name_char);
        let reference = if glued {
            format!("${{{name}}}")
        } else {
            format!("${name}")
        };
        text.replace_range(open..=close, &reference);
        from = open + reference.len();
    }
    text
}

fn fresh_name(rules: &RuleSet, next_id: &mut usize) -> String {
    loop {
        let name = format!("parent_{next_id}");
        *next_id += 1;
        if !rules.contains(&name) {
            return name;
        }
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && matches!(chars.peek(), Some('(' | ')' | '|')) {
            continue;
        }
        out.push(c);
    }
    out
}
