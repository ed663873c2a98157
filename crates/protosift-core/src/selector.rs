//! Per-generator selection.
//!
//! A [`GeneratorConfig`] binds one compiled [`PathFilter`] to one
//! generator entry from the loaded configuration, together with that
//! generator's option bundle. The dispatch loop asks it one question per
//! source file: [`should_process`](GeneratorConfig::should_process).

use log::debug;

use crate::error::PatternError;
use crate::filter::PathFilter;

/// One generator's selection state for a compilation run.
///
/// The option bundle `O` is opaque to this crate; the concrete option
/// types live with the generators themselves. Built once per generator
/// entry before dispatch begins, then never mutated and never shared
/// across runs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig<O> {
    name: String,
    filter: PathFilter,
    options: O,
}

impl<O> GeneratorConfig<O> {
    /// Build a generator config from raw pattern lists.
    ///
    /// Compiles both lists into a [`PathFilter`]. Fails with a
    /// [`PatternError`] carrying the generator name if any pattern is
    /// invalid, so a configuration mistake surfaces before any file is
    /// dispatched and before any output is emitted.
    pub fn build<I, E>(
        name: impl Into<String>,
        include: &[I],
        exclude: &[E],
        options: O,
    ) -> Result<Self, PatternError>
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let name = name.into();
        let filter = PathFilter::compile(include, exclude)
            .map_err(|err| err.with_generator(name.as_str()))?;
        debug!(
            "generator `{}` configured: {} include, {} exclude pattern(s)",
            name,
            include.len(),
            exclude.len()
        );
        Ok(Self {
            name,
            filter,
            options,
        })
    }

    /// Decide whether this generator processes a source file.
    ///
    /// `source_file` must already be normalized to the root-relative,
    /// slash-separated form; a thin delegation to
    /// [`PathFilter::matches`].
    pub fn should_process(&self, source_file: &str) -> bool {
        self.filter.matches(source_file)
    }

    /// The generator's name, as it appears in the configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled filter.
    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// The generator-specific option bundle.
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Consume the config, returning the option bundle.
    pub fn into_options(self) -> O {
        self.options
    }
}
