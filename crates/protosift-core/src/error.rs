//! Error taxonomy for filter construction.
//!
//! Every failure surfaces at construction time, before any source file is
//! dispatched; matching itself is total and cannot fail.

use std::fmt;

use thiserror::Error;

/// Which pattern list of a filter a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternList {
    Include,
    Exclude,
}

impl PatternList {
    /// Stable lowercase name, as it appears in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternList::Include => "include",
            PatternList::Exclude => "exclude",
        }
    }
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context-free glob syntax errors reported by the compiler.
///
/// The compiler does not know which list or generator a pattern belongs
/// to; [`PatternError`] carries that context.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobError {
    /// The pattern is the empty string.
    #[error("pattern is empty")]
    Empty,

    /// The pattern contains an empty path segment: a leading slash, a
    /// trailing slash, or `//`.
    #[error("pattern contains an empty path segment")]
    EmptySegment,

    /// A `\` escape at the end of a segment, with nothing left to escape.
    #[error("dangling `\\` escape")]
    DanglingEscape,

    /// `**` combined with other characters inside one segment, e.g.
    /// `a**` or `***`.
    #[error("`**` must stand alone as a full path segment")]
    StrayRecursiveWildcard,
}

/// A glob pattern that failed to compile, with the context needed to
/// locate it in the loaded configuration.
///
/// This is the only checked failure mode the crate exposes. `Display`
/// names the pattern verbatim plus its originating list and generator;
/// the structured accessors let an embedding front end render the same
/// information through its own message catalog instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pattern: String,
    list: PatternList,
    generator: Option<String>,
    source: GlobError,
}

impl PatternError {
    pub(crate) fn new(pattern: impl Into<String>, list: PatternList, source: GlobError) -> Self {
        Self {
            pattern: pattern.into(),
            list,
            generator: None,
            source,
        }
    }

    /// Attach the name of the generator whose configuration listed the
    /// pattern.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// The offending pattern, verbatim.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Which list (include or exclude) the pattern came from.
    pub fn list(&self) -> PatternList {
        self.list
    }

    /// The generator the pattern was configured for, when known.
    pub fn generator(&self) -> Option<&str> {
        self.generator.as_deref()
    }

    /// The underlying syntax error.
    pub fn glob_error(&self) -> GlobError {
        self.source
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.generator {
            Some(generator) => write!(
                f,
                "invalid {} pattern `{}` for generator `{}`: {}",
                self.list, self.pattern, generator, self.source
            ),
            None => write!(
                f,
                "invalid {} pattern `{}`: {}",
                self.list, self.pattern, self.source
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_list_names() {
        assert_eq!(PatternList::Include.as_str(), "include");
        assert_eq!(PatternList::Exclude.as_str(), "exclude");
        assert_eq!(PatternList::Exclude.to_string(), "exclude");
    }

    #[test]
    fn display_without_generator() {
        let err = PatternError::new("", PatternList::Include, GlobError::Empty);
        assert_eq!(err.to_string(), "invalid include pattern ``: pattern is empty");
    }

    #[test]
    fn display_with_generator() {
        let err = PatternError::new("a/**b", PatternList::Exclude, GlobError::StrayRecursiveWildcard)
            .with_generator("grpc-stubs");
        assert_eq!(
            err.to_string(),
            "invalid exclude pattern `a/**b` for generator `grpc-stubs`: \
             `**` must stand alone as a full path segment"
        );
    }

    #[test]
    fn source_chain_exposes_glob_error() {
        use std::error::Error as _;

        let err = PatternError::new("\\", PatternList::Include, GlobError::DanglingEscape);
        let source = err.source().expect("expected a source");
        assert_eq!(source.to_string(), GlobError::DanglingEscape.to_string());
    }

    #[test]
    fn accessors_report_context() {
        let err = PatternError::new("x/", PatternList::Exclude, GlobError::EmptySegment)
            .with_generator("mock-services");
        assert_eq!(err.pattern(), "x/");
        assert_eq!(err.list(), PatternList::Exclude);
        assert_eq!(err.generator(), Some("mock-services"));
        assert_eq!(err.glob_error(), GlobError::EmptySegment);
    }
}
