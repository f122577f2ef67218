/// Default number of hash buckets in the symbol table.
pub const DEFAULT_BUCKETS: usize = 10;
/// Default limit on the number of scopes nested inside the global scope.
pub const DEFAULT_MAX_DEPTH: usize = 9;

/// Interpreter settings.
///
/// A `Config` is handed to [`Context::with_config`] (or
/// [`Interpreter::new`]) once, before the first command runs.
///
/// [`Context::with_config`]: crate::interpreter::evaluator::core::Context::with_config
/// [`Interpreter::new`]: crate::Interpreter::new
///
/// ## Example
/// ```
/// use borg::config::{Config, DEFAULT_BUCKETS};
///
/// let config = Config { max_depth: None,
///                       ..Config::default() };
///
/// assert_eq!(config.buckets, DEFAULT_BUCKETS);
/// assert!(!config.strict_scopes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of hash buckets in the symbol table. Zero is treated as one.
    pub buckets:       usize,
    /// Maximum number of scopes nested inside the global scope, or `None` for
    /// no limit.
    pub max_depth:     Option<usize>,
    /// Report a `START` past `max_depth` as an error instead of silently
    /// staying at the current depth.
    pub strict_scopes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { buckets:       DEFAULT_BUCKETS,
               max_depth:     Some(DEFAULT_MAX_DEPTH),
               strict_scopes: false, }
    }
}
