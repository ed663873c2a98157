//! Include/exclude path filtering.
//!
//! A [`PathFilter`] owns an ordered list of include patterns and an
//! ordered list of exclude patterns, each compiled once at construction.
//! An empty include list means "match everything"; an empty exclude list
//! means "exclude nothing"; for a path matched by both lists, exclusion
//! wins.

use log::debug;

use crate::error::{PatternError, PatternList};
use crate::glob::{self, Matcher};

/// An immutable include/exclude filter over normalized source paths.
///
/// Constructed once per generator, before dispatch begins; afterwards it
/// is a read-only value that any number of worker threads may query
/// concurrently. The default filter is unrestricted: both lists empty,
/// every non-empty path accepted.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: Vec<Matcher>,
    exclude: Vec<Matcher>,
}

impl PathFilter {
    /// Compile include and exclude pattern lists into a filter.
    ///
    /// Every pattern is compiled exactly once; the first invalid pattern
    /// aborts construction with a [`PatternError`] naming the pattern and
    /// its list, and no partially-built filter is observable.
    pub fn compile<I, E>(include: &[I], exclude: &[E]) -> Result<Self, PatternError>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let filter = Self {
            include: compile_list(include, PatternList::Include)?,
            exclude: compile_list(exclude, PatternList::Exclude)?,
        };
        debug!(
            "compiled path filter: {} include, {} exclude pattern(s)",
            filter.include.len(),
            filter.exclude.len()
        );
        Ok(filter)
    }

    /// Decide whether a candidate path is selected.
    ///
    /// `path` must already be normalized: root-relative and
    /// slash-separated. Total over any input; the empty path is never
    /// selected. A path is selected when the include list is empty or
    /// any include pattern matches, and no exclude pattern matches.
    pub fn matches(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        let included = self.include.is_empty() || self.include.iter().any(|m| m.is_match(path));
        included && !self.exclude.iter().any(|m| m.is_match(path))
    }

    /// True when no patterns are configured at all, i.e. the filter
    /// accepts every non-empty path.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// The include patterns, in declaration order.
    pub fn include_patterns(&self) -> impl Iterator<Item = &str> {
        self.include.iter().map(Matcher::pattern)
    }

    /// The exclude patterns, in declaration order.
    pub fn exclude_patterns(&self) -> impl Iterator<Item = &str> {
        self.exclude.iter().map(Matcher::pattern)
    }
}

fn compile_list<S: AsRef<str>>(
    patterns: &[S],
    list: PatternList,
) -> Result<Vec<Matcher>, PatternError> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            glob::compile(pattern).map_err(|source| PatternError::new(pattern, list, source))
        })
        .collect()
}
