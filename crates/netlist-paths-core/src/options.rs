//! # Options / query context
//!
//! An explicit, immutable value constructed once per query session and
//! threaded by reference into the matcher and graph. This replaces a
//! process-wide singleton: two callers may run independent queries with
//! independent `Options` over the same read-only `Graph` without any
//! hidden coupling between them.

/// How a name pattern is resolved to vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Exact,
    Wildcard,
    Regex,
}

/// Immutable configuration for a single query session.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub match_mode: MatchMode,
    pub normalize_hierarchy_separators: bool,
    pub traverse_registers: bool,
    pub restrict_start_points: bool,
    pub restrict_finish_points: bool,
    pub match_any: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Exact,
            normalize_hierarchy_separators: false,
            traverse_registers: false,
            restrict_start_points: false,
            restrict_finish_points: false,
            match_any: false,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder mirroring the CLI's flags one-to-one so the front-end can
/// construct an `Options` value directly from parsed arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsBuilder {
    opts: OptionsInner,
}

#[derive(Debug, Clone, Copy, Default)]
struct OptionsInner {
    match_mode: Option<MatchMode>,
    normalize_hierarchy_separators: bool,
    traverse_registers: bool,
    restrict_start_points: bool,
    restrict_finish_points: bool,
    match_any: bool,
}

impl OptionsBuilder {
    #[must_use]
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.opts.match_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn normalize_hierarchy_separators(mut self, v: bool) -> Self {
        self.opts.normalize_hierarchy_separators = v;
        self
    }

    #[must_use]
    pub fn traverse_registers(mut self, v: bool) -> Self {
        self.opts.traverse_registers = v;
        self
    }

    #[must_use]
    pub fn restrict_points(mut self, v: bool) -> Self {
        self.opts.restrict_start_points = v;
        self.opts.restrict_finish_points = v;
        self
    }

    #[must_use]
    pub fn match_any(mut self, v: bool) -> Self {
        self.opts.match_any = v;
        self
    }

    #[must_use]
    pub fn build(self) -> Options {
        Options {
            match_mode: self.opts.match_mode.unwrap_or_default(),
            normalize_hierarchy_separators: self.opts.normalize_hierarchy_separators,
            traverse_registers: self.opts.traverse_registers,
            restrict_start_points: self.opts.restrict_start_points,
            restrict_finish_points: self.opts.restrict_finish_points,
            match_any: self.opts.match_any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_exact_match() {
        let opts = Options::default();
        assert_eq!(opts.match_mode, MatchMode::Exact);
        assert!(!opts.traverse_registers);
    }

    #[test]
    fn builder_sets_requested_fields() {
        let opts = Options::builder()
            .match_mode(MatchMode::Wildcard)
            .traverse_registers(true)
            .match_any(true)
            .build();
        assert_eq!(opts.match_mode, MatchMode::Wildcard);
        assert!(opts.traverse_registers);
        assert!(opts.match_any);
        assert!(!opts.normalize_hierarchy_separators);
    }
}
