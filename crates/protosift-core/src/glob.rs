//! Glob pattern compilation.
//!
//! Translates one POSIX-style path-glob pattern into a reusable,
//! anchored whole-path [`Matcher`]. Wildcards:
//!
//! - `*` matches a run of zero or more non-separator characters
//! - `?` matches exactly one non-separator character
//! - `**`, standing alone as a path segment, matches zero or more whole
//!   segments
//! - `\` escapes the next character within a segment
//!
//! Patterns are root-relative, slash-separated, and case-sensitive. No
//! pattern matches the empty path. Matching is anchored: a pattern covers
//! the whole candidate path, never an arbitrary suffix.

use regex::Regex;

use crate::error::GlobError;

/// A compiled glob pattern.
///
/// Compilation happens once, at filter construction; matching is
/// read-only and safe to share across worker threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
}

impl Matcher {
    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test a normalized, root-relative, slash-separated path.
    ///
    /// Total over any input; the empty path never matches.
    pub fn is_match(&self, path: &str) -> bool {
        !path.is_empty() && self.regex.is_match(path)
    }
}

/// One `/`-delimited unit of a pattern after validation.
enum Token {
    /// A `**` segment: zero or more whole path segments.
    Recursive,
    /// Any other segment, already translated to a regex fragment.
    Segment(String),
}

/// Compile one glob pattern into a [`Matcher`].
///
/// Pure and deterministic. Fails on the empty pattern, an empty path
/// segment (leading `/`, trailing `/`, or `//`), a dangling `\` escape,
/// or `**` mixed with other characters in one segment.
pub fn compile(pattern: &str) -> Result<Matcher, GlobError> {
    if pattern.is_empty() {
        return Err(GlobError::Empty);
    }

    let mut tokens = Vec::new();
    for segment in pattern.split('/') {
        if segment.is_empty() {
            return Err(GlobError::EmptySegment);
        }
        if segment == "**" {
            // Consecutive `**` segments collapse to one.
            if !matches!(tokens.last(), Some(Token::Recursive)) {
                tokens.push(Token::Recursive);
            }
        } else {
            tokens.push(Token::Segment(translate_segment(segment)?));
        }
    }

    // Every metacharacter is escaped and every group is a fixed fragment,
    // so the assembled expression is always valid.
    let regex = Regex::new(&assemble(&tokens)).expect("assembled glob regex is always valid");

    Ok(Matcher {
        pattern: pattern.to_owned(),
        regex,
    })
}

/// Translate one non-`**` segment into a regex fragment.
fn translate_segment(segment: &str) -> Result<String, GlobError> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => push_literal(&mut out, escaped),
                None => return Err(GlobError::DanglingEscape),
            },
            '*' => {
                if chars.peek() == Some(&'*') {
                    return Err(GlobError::StrayRecursiveWildcard);
                }
                out.push_str("[^/]*");
            }
            '?' => out.push_str("[^/]"),
            other => push_literal(&mut out, other),
        }
    }
    Ok(out)
}

/// Append one literal character, escaped for the regex engine.
fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Concatenate translated segments into one anchored expression.
///
/// `**` placement decides its expansion: alone it spans the whole path,
/// leading it admits any prefix of whole segments, trailing it requires
/// at least one further segment (so `dir/**` covers everything under
/// `dir` but not `dir` itself), and interior it spans zero or more
/// segments between its neighbors.
fn assemble(tokens: &[Token]) -> String {
    let mut out = String::from("^");
    // Set after a literal segment; cleared after a recursive group, whose
    // expansion already carries its own separator.
    let mut needs_separator = false;
    for (idx, token) in tokens.iter().enumerate() {
        let last = idx == tokens.len() - 1;
        match token {
            Token::Segment(fragment) => {
                if needs_separator {
                    out.push('/');
                }
                out.push_str(fragment);
                needs_separator = true;
            }
            Token::Recursive => {
                match (needs_separator, last) {
                    (false, true) => out.push_str(".+"),
                    (false, false) => out.push_str("(?:[^/]+/)*"),
                    (true, true) => out.push_str("(?:/[^/]+)+"),
                    (true, false) => out.push_str("/(?:[^/]+/)*"),
                }
                needs_separator = false;
            }
        }
    }
    out.push('$');
    out
}
