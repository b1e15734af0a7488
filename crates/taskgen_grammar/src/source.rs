//! Parsing of a single grammar file.
//!
//! Comments are stripped before rules are read: `/* ... */` blocks, and
//! single-line comments starting with `//`, `#`, `;` or `%`. Comment markers
//! inside `{...}` wildcard markers are ordinary text. A single-line comment
//! may carry a directive:
//!
//! ```text
//! // grammar name Fetch and carry
//! // grammar tier Moderate
//! # load "shared/objects.txt"
//! ; import common.txt
//! ```

use std::str::FromStr;

use taskgen_foundation::{Error, ErrorContext, Result, Tier};

use crate::expand::{check_balanced, is_name_char, split_top_level};
use crate::rules::RuleSet;

/// A directive that pulls rules from another file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `load <path>`: merge every rule of the file.
    Load(String),
    /// `import <path>`: merge every rule except the file's start rule.
    Import(String),
}

impl Directive {
    /// Returns the referenced path as written.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Load(path) | Self::Import(path) => path,
        }
    }
}

/// The parsed contents of one grammar file, before imports and expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name from `grammar name`.
    pub name: Option<String>,
    /// Tier from `grammar tier`.
    pub tier: Option<Tier>,
    /// Load and import directives in file order.
    pub directives: Vec<Directive>,
    /// The file's own rules, unexpanded.
    pub rules: RuleSet,
}

impl SourceFile {
    /// Parses grammar text.
    ///
    /// # Errors
    /// Returns a `GrammarParse` error for malformed rule lines, unbalanced
    /// parentheses, unterminated block comments, or an unknown tier, and an
    /// `UnsupportedDirective` error for `import <path> as $NT`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut file = Self::default();
        let mut in_block = false;
        let mut block_start = 0;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            if !in_block {
                block_start = line;
            }
            let (code, comment) = strip_comments(raw, &mut in_block);
            if let Some(comment) = comment {
                file.apply_comment(&comment, line)?;
            }
            file.parse_rule_line(&code, line)?;
        }

        if in_block {
            return Err(Error::grammar_parse(
                "unterminated block comment",
                block_start,
            ));
        }
        Ok(file)
    }

    fn apply_comment(&mut self, comment: &str, line: usize) -> Result<()> {
        let comment = comment.trim();

        if let Some(rest) = strip_keyword(comment, "grammar") {
            if let Some(name) = strip_keyword(rest, "name") {
                self.name = Some(name.to_string());
            } else if let Some(tier) = strip_keyword(rest, "tier") {
                self.tier = Some(Tier::from_str(tier).map_err(|e| Error::grammar_parse(e, line))?);
            }
            return Ok(());
        }

        if let Some(rest) = strip_keyword(comment, "load") {
            if let Some(path) = single_path(rest) {
                self.directives.push(Directive::Load(path));
            }
            return Ok(());
        }

        if let Some(rest) = strip_keyword(comment, "import") {
            let words: Vec<&str> = rest.split_whitespace().collect();
            if let [path, as_kw, target] = words.as_slice() {
                if as_kw.eq_ignore_ascii_case("as") && target.starts_with('$') {
                    return Err(Error::unsupported_directive(format!(
                        "import {path} as {target}"
                    ))
                    .with_context(ErrorContext::new().with_position(line, 1)));
                }
            }
            if let Some(path) = single_path(rest) {
                self.directives.push(Directive::Import(path));
            }
        }
        Ok(())
    }

    fn parse_rule_line(&mut self, code: &str, line: usize) -> Result<()> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(());
        }

        let Some(after_sigil) = code.strip_prefix('$') else {
            return Err(Error::grammar_parse(
                format!("expected a rule like $Name = ..., found {code:?}"),
                line,
            ));
        };
        let name_len = after_sigil
            .find(|c: char| !is_name_char(c))
            .unwrap_or(after_sigil.len());
        if name_len == 0 {
            return Err(Error::grammar_parse("missing non-terminal name", line));
        }
        let (name, rest) = after_sigil.split_at(name_len);
        let Some(body) = rest.trim_start().strip_prefix('=') else {
            return Err(Error::grammar_parse(
                format!("expected '=' after ${name}"),
                line,
            ));
        };

        if let Some(problem) = check_balanced(body) {
            return Err(Error::grammar_parse(
                format!("{problem} in rule ${name}"),
                line,
            ));
        }

        let body = body.trim();
        if body.is_empty() {
            return Ok(());
        }
        let alternatives = split_top_level(body)
            .into_iter()
            .map(|alt| alt.trim().to_string());
        self.rules.add(name, alternatives);
        Ok(())
    }
}

/// Splits one line into code and an optional single-line comment body,
/// removing block comments along the way.
fn strip_comments(line: &str, in_block: &mut bool) -> (String, Option<String>) {
    let mut code = String::with_capacity(line.len());
    let mut braces = 0usize;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if *in_block {
            if c == '*' && next == Some('/') {
                chars.next();
                *in_block = false;
                code.push(' ');
            }
            continue;
        }
        match c {
            '\\' => {
                code.push(c);
                if let Some((_, escaped)) = chars.next() {
                    code.push(escaped);
                }
            }
            '{' => {
                braces += 1;
                code.push(c);
            }
            '}' => {
                braces = braces.saturating_sub(1);
                code.push(c);
            }
            '/' if braces == 0 && next == Some('*') => {
                chars.next();
                *in_block = true;
            }
            '/' if braces == 0 && next == Some('/') => {
                return (code, Some(line[i + 2..].to_string()));
            }
            '#' | ';' | '%' if braces == 0 => {
                return (code, Some(line[i + 1..].to_string()));
            }
            _ => code.push(c),
        }
    }
    (code, None)
}

/// Strips a case-insensitive leading keyword followed by whitespace or end.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let rest = &text[keyword.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Reads a lone path, quoted or bare. A bare path needs a `.` or a `/`
/// somewhere, so `// load dishwasher` stays a comment.
fn single_path(text: &str) -> Option<String> {
    let text = text.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return (!inner.is_empty()).then(|| inner.to_string());
        }
    }
    let mut words = text.split_whitespace();
    match (words.next(), words.next()) {
        (Some(path), None) if path.contains(['.', '/']) => Some(path.to_string()),
        _ => None,
    }
}
