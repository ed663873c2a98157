//! # protosift-core
//!
//! Input-selection engine for multi-generator code-generation pipelines.
//!
//! Given the include/exclude path-glob patterns declared for a code
//! generator, decides which source files are handed to that generator:
//!
//! - glob compilation (`*`, `?`, `**`, `\` escapes) into reusable,
//!   anchored whole-path matchers
//! - inclusive-by-default include/exclude filtering, with exclusion
//!   winning for paths matched by both lists
//! - per-generator binding with construction-time validation, so a bad
//!   pattern aborts the run before any generator emits output
//!
//! Candidate paths are matched root-relative, slash-separated, and
//! case-sensitively; normalizing them is the caller's job, as is walking
//! the file system and loading the configuration that supplies the
//! pattern lists. Construction happens once during configuration load;
//! afterwards every value here is immutable and safe to query from any
//! number of worker threads.

pub mod error;
pub mod filter;
pub mod glob;
pub mod selector;

pub use error::{GlobError, PatternError, PatternList};
pub use filter::PathFilter;
pub use glob::Matcher;
pub use selector::GeneratorConfig;
