//! Wildcard marker scanning.
//!
//! ```text
//! {name[?][ subtype][ id][ where <clause>][ meta: <text>]}
//! ```
//!
//! - `name` is a run of lowercase letters, `?` marks the wildcard obfuscated
//! - `subtype` is a further lowercase word other than `where` or `meta`
//! - `id` is an unsigned integer; markers without one get an automatic id
//! - `where` runs to the closing brace, or to a top-level `meta:`
//! - `meta:` runs to the closing brace; `\{` and `\}` are literal braces
//!
//! Markers nested in a clause or metadata text are registered like top-level
//! ones and leave a [`Piece::Ref`] behind. A `{` that does not open a
//! well-formed marker is ordinary text.

use taskgen_foundation::{Result, Span};

use crate::ids::IdCounter;

/// Builds the keycode shared by every marker of one identity group.
#[must_use]
pub fn keycode(name: &str, id: u32) -> String {
    format!("{name}{id:04}")
}

// =============================================================================
// Templates
// =============================================================================

/// A fragment of clause or metadata text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Literal text.
    Text(String),
    /// A nested marker, by index into the scanned occurrences.
    Ref(usize),
}

/// Clause or metadata text with nested markers cut out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Creates a template from pieces.
    #[must_use]
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// Returns the pieces in order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the occurrence indices referenced by this template.
    pub fn refs(&self) -> impl Iterator<Item = usize> + '_ {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Ref(index) => Some(*index),
            Piece::Text(_) => None,
        })
    }

    /// Returns true if the template references another marker.
    #[must_use]
    pub fn has_refs(&self) -> bool {
        self.refs().next().is_some()
    }

    /// Renders the template, asking `value` for each reference.
    ///
    /// `value` receives the reference index and the text immediately before
    /// it, so callers can tell whether the author quoted the reference.
    pub fn render(&self, mut value: impl FnMut(usize, &str) -> String) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Ref(index) => {
                    let rendered = value(*index, &out);
                    out.push_str(&rendered);
                }
            }
        }
        out
    }
}

// =============================================================================
// Occurrences
// =============================================================================

/// One wildcard marker found in a generated sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    /// The domain keyword as written.
    pub name: String,
    /// True for `{name? ...}`.
    pub obfuscated: bool,
    /// The subtype word, if any.
    pub subtype: Option<String>,
    /// The explicit or assigned id.
    pub id: u32,
    /// True if the author wrote the id.
    pub explicit_id: bool,
    /// The `where` clause.
    pub clause: Option<Template>,
    /// The `meta:` text.
    pub meta: Option<Template>,
    /// Location in the sentence; `None` for markers nested in another marker.
    pub span: Option<Span>,
}

impl Occurrence {
    /// Returns this occurrence's keycode.
    #[must_use]
    pub fn keycode(&self) -> String {
        keycode(&self.name, self.id)
    }

    /// Returns true if this marker was written inside another marker.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.span.is_none()
    }
}

/// An occurrence before ids are settled.
struct RawMarker {
    name: String,
    obfuscated: bool,
    subtype: Option<String>,
    id: Option<u32>,
    clause: Option<Template>,
    meta: Option<Template>,
    span: Option<Span>,
}

/// The fixed parts of one marker and the raw text of its clause and metadata.
struct Header<'a> {
    name: &'a str,
    obfuscated: bool,
    subtype: Option<&'a str>,
    id: Option<u32>,
    clause: Option<&'a str>,
    meta: Option<&'a str>,
    end: usize,
}

/// Scans a sentence for wildcard markers.
///
/// Top-level markers come out in sentence order, each followed by the
/// markers nested inside it. Markers without an id get one from `ids` after
/// the counter has been raised above every explicit id in the sentence.
/// Explicit ids above [`IdCounter::MAX_EXPLICIT`] do not form a marker.
///
/// # Errors
///
/// Fails when `ids` runs out of automatic ids.
pub fn scan(text: &str, ids: &mut IdCounter) -> Result<Vec<Occurrence>> {
    let mut raw = Vec::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        pos = match register(&mut raw, text, start, true) {
            Some((_, end)) => end,
            None => start + 1,
        };
    }

    if let Some(max) = raw.iter().filter_map(|m| m.id).max() {
        ids.raise_above(max);
    }

    raw.into_iter()
        .map(|marker| {
            let id = match marker.id {
                Some(id) => id,
                None => ids.next_id()?,
            };
            Ok(Occurrence {
                explicit_id: marker.id.is_some(),
                id,
                name: marker.name,
                obfuscated: marker.obfuscated,
                subtype: marker.subtype,
                clause: marker.clause,
                meta: marker.meta,
                span: marker.span,
            })
        })
        .collect()
}

/// Parses the marker at `start` and registers it along with everything nested
/// in it. Returns its index and end offset.
fn register(
    raw: &mut Vec<RawMarker>,
    text: &str,
    start: usize,
    top_level: bool,
) -> Option<(usize, usize)> {
    let header = parse_header(text, start)?;
    let index = raw.len();
    raw.push(RawMarker {
        name: header.name.to_string(),
        obfuscated: header.obfuscated,
        subtype: header.subtype.map(String::from),
        id: header.id,
        clause: None,
        meta: None,
        span: top_level.then(|| Span::new(start, header.end)),
    });

    let clause = header.clause.map(|body| template(raw, body, false));
    let meta = header.meta.map(|body| template(raw, body, true));
    raw[index].clause = clause;
    raw[index].meta = meta;
    Some((index, header.end))
}

/// Splits clause or metadata text into literal pieces and nested markers.
fn template(raw: &mut Vec<RawMarker>, text: &str, unescape_braces: bool) -> Template {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, n @ ('{' | '}'))) if unescape_braces => literal.push(n),
                Some((_, n)) => {
                    literal.push('\\');
                    literal.push(n);
                }
                None => literal.push('\\'),
            },
            '{' => {
                if let Some((index, end)) = register(raw, text, i, false) {
                    if !literal.is_empty() {
                        pieces.push(Piece::Text(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Ref(index));
                    while chars.peek().is_some_and(|&(j, _)| j < end) {
                        chars.next();
                    }
                } else {
                    literal.push(c);
                }
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Text(literal));
    }
    Template::new(pieces)
}

// =============================================================================
// Character scanner
// =============================================================================

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    /// Consumes `word` if it is followed by whitespace.
    fn eat_keyword(&mut self, word: &str) -> bool {
        let rest = self.rest();
        let matched = rest.starts_with(word)
            && rest[word.len()..].starts_with(char::is_whitespace);
        if matched {
            self.pos += word.len();
        }
        matched
    }
}

fn parse_header(text: &str, start: usize) -> Option<Header<'_>> {
    let mut cursor = Cursor {
        text,
        pos: start + 1,
    };

    let name = cursor.take_while(|c| c.is_ascii_lowercase());
    if name.is_empty() {
        return None;
    }
    let obfuscated = cursor.eat('?');
    cursor.skip_whitespace();

    let mark = cursor.pos;
    let word = cursor.take_while(|c| c.is_ascii_lowercase());
    let subtype = if word.is_empty() || word == "where" || word == "meta" {
        cursor.pos = mark;
        None
    } else {
        Some(word)
    };
    cursor.skip_whitespace();

    let digits = cursor.take_while(|c| c.is_ascii_digit());
    let id = if digits.is_empty() {
        None
    } else {
        Some(
            digits
                .parse::<u32>()
                .ok()
                .filter(|id| *id <= IdCounter::MAX_EXPLICIT)?,
        )
    };
    cursor.skip_whitespace();

    let clause = if cursor.eat_keyword("where") {
        cursor.skip_whitespace();
        Some(scan_clause(&mut cursor)?.trim_end())
    } else {
        None
    };
    cursor.skip_whitespace();

    let meta = if cursor.rest().starts_with("meta:") {
        cursor.pos += "meta:".len();
        Some(scan_meta(&mut cursor)?.trim())
    } else {
        None
    };
    cursor.skip_whitespace();

    if !cursor.eat('}') {
        return None;
    }
    Some(Header {
        name,
        obfuscated,
        subtype,
        id,
        clause,
        meta,
        end: cursor.pos,
    })
}

/// Consumes a where-clause up to, not past, the marker's closing brace or a
/// top-level `meta:`.
fn scan_clause<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut after_space = true;

    while let Some(c) = cursor.peek() {
        if depth == 0 {
            match quote {
                Some(q) => {
                    if c == '\\' {
                        cursor.pos += 1;
                        if let Some(n) = cursor.peek() {
                            cursor.pos += n.len_utf8();
                        }
                        continue;
                    }
                    if c == q {
                        quote = None;
                    }
                }
                None => {
                    if c == '}' {
                        return Some(&cursor.text[start..cursor.pos]);
                    }
                    if after_space && cursor.rest().starts_with("meta:") {
                        return Some(&cursor.text[start..cursor.pos]);
                    }
                    if c == '"' || c == '\'' {
                        quote = Some(c);
                    }
                }
            }
        }
        match c {
            '{' => depth += 1,
            '}' if depth > 0 => depth -= 1,
            _ => {}
        }
        after_space = c.is_whitespace();
        cursor.pos += c.len_utf8();
    }
    None
}

/// Consumes metadata text up to the marker's closing brace.
fn scan_meta<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos;
    let mut depth = 0usize;

    while let Some(c) = cursor.peek() {
        match c {
            '\\' => {
                cursor.pos += 1;
                if let Some(n) = cursor.peek() {
                    cursor.pos += n.len_utf8();
                }
                continue;
            }
            '{' => depth += 1,
            '}' if depth == 0 => return Some(&cursor.text[start..cursor.pos]),
            '}' => depth -= 1,
            _ => {}
        }
        cursor.pos += c.len_utf8();
    }
    None
}
