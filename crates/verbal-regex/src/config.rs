//! Builder configuration.
//!
//! A [`BuilderConfig`] is passed explicitly to the builder constructors; no
//! process-wide defaults exist. [`BuilderConfig::from_env`] offers an
//! environment-driven starting point.

use crate::flags::{Flag, FlagSet};
use verbal_regex_policy::MisusePolicy;

/// Flags every builder starts with unless configured otherwise: `g` and `m`.
pub const DEFAULT_FLAGS: FlagSet = FlagSet::EMPTY.with(Flag::Global).with(Flag::Multiline);

/// Environment variable naming the misuse policy (`ignore`, `reject`, `panic`).
pub const MISUSE_ENV: &str = "VERBAL_REGEX_MISUSE";

/// Environment variable holding the default flags, e.g. `gi`.
pub const FLAGS_ENV: &str = "VERBAL_REGEX_FLAGS";

/// Construction-time settings for an [`ExpressionBuilder`](crate::ExpressionBuilder).
///
/// # Examples
/// ```
/// use verbal_regex::{BuilderConfig, DEFAULT_FLAGS, FlagSet, MisusePolicy};
///
/// let config = BuilderConfig::default();
/// assert_eq!(config.default_flags, DEFAULT_FLAGS);
/// assert_eq!(config.misuse_policy, MisusePolicy::Ignore);
///
/// let strict = config
///     .with_flags(FlagSet::EMPTY)
///     .with_misuse_policy(MisusePolicy::Reject);
/// assert!(strict.default_flags.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Flags a new builder starts with.
    pub default_flags: FlagSet,
    /// Reaction to calls that cannot be honoured as written.
    pub misuse_policy: MisusePolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderConfig {
    /// The default configuration: [`DEFAULT_FLAGS`] and [`MisusePolicy::Ignore`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_flags: DEFAULT_FLAGS,
            misuse_policy: MisusePolicy::Ignore,
        }
    }

    /// Replace the starting flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: FlagSet) -> Self {
        self.default_flags = flags;
        self
    }

    /// Replace the misuse policy.
    #[must_use]
    pub const fn with_misuse_policy(mut self, policy: MisusePolicy) -> Self {
        self.misuse_policy = policy;
        self
    }

    /// Read [`MISUSE_ENV`] and [`FLAGS_ENV`], falling back to the defaults.
    ///
    /// Unparseable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        let misuse_policy = lookup(MISUSE_ENV)
            .and_then(|raw| parse_setting(MISUSE_ENV, &raw))
            .unwrap_or(defaults.misuse_policy);
        let default_flags = lookup(FLAGS_ENV)
            .and_then(|raw| parse_setting(FLAGS_ENV, &raw))
            .unwrap_or(defaults.default_flags);
        Self {
            default_flags,
            misuse_policy,
        }
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|err| log::warn!("ignoring {key}={raw:?}: {err}"))
        .ok()
}
