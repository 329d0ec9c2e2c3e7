use crate::cli::Args;

/// Default tolerance for the prelude's square root, as used in the chapter.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Default limit on nested compound procedure applications.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Settings used to build an evaluation context.
///
/// ## Example
/// ```
/// use schemer::Config;
///
/// let config = Config { tolerance: 1e-9,
///                       ..Config::default() };
///
/// assert_eq!(config.max_depth, 10_000);
/// assert!(config.prelude);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Value bound to the global `tolerance`, read by `good-enough?` in the
    /// prelude.
    pub tolerance: f64,
    /// Applications nested deeper than this fail with `RecursionLimit`.
    pub max_depth: usize,
    /// Whether the prelude procedures are defined in the global environment.
    pub prelude:   bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE,
               max_depth: DEFAULT_MAX_DEPTH,
               prelude:   true, }
    }
}

impl Config {
    /// Builds a configuration from parsed command-line arguments.
    #[must_use]
    pub const fn from_args(args: &Args) -> Self {
        Self { tolerance: args.tolerance,
               max_depth: args.max_depth,
               prelude:   !args.no_prelude, }
    }
}
