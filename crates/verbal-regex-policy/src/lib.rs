//! Shared misuse policy types for verbal-regex.
//!
//! This crate centralizes the policy enum deciding how the expression builder
//! reacts to degenerate input, so the builder and its configuration layer
//! depend on a single, canonical definition.

use std::fmt;
use std::str::FromStr;

/// How the builder reacts when a call cannot be honoured as written.
///
/// Builder calls never return errors so that chains stay fluent. Examples of
/// misuse are closing a capture that was never opened, or passing three
/// counts to a bounded repetition.
///
/// # Examples
///
/// ```
/// use verbal_regex_policy::MisusePolicy;
///
/// let policy = MisusePolicy::default();
/// assert!(!policy.records());
/// assert!(!policy.panics());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MisusePolicy {
    /// Degrade to a no-op or an empty fragment (default).
    #[default]
    Ignore,
    /// Degrade like `Ignore`, but remember the first misuse and fail when a
    /// matcher is built.
    Reject,
    /// Panic at the misusing call.
    Panic,
}

impl MisusePolicy {
    /// Return the policy name as used in configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_regex_policy::MisusePolicy;
    ///
    /// assert_eq!(MisusePolicy::Reject.as_str(), "reject");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Reject => "reject",
            Self::Panic => "panic",
        }
    }

    /// Returns `true` if misuse must be kept for later reporting.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_regex_policy::MisusePolicy;
    ///
    /// assert!(MisusePolicy::Reject.records());
    /// assert!(!MisusePolicy::Ignore.records());
    /// ```
    #[must_use]
    pub const fn records(self) -> bool {
        matches!(self, Self::Reject)
    }

    /// Returns `true` if misuse aborts the current call.
    #[must_use]
    pub const fn panics(self) -> bool {
        matches!(self, Self::Panic)
    }
}

impl fmt::Display for MisusePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`MisusePolicy`] from a string fails.
///
/// Contains the unrecognised policy text for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisusePolicyParseError(pub String);

impl fmt::Display for MisusePolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid misuse policy: {}", self.0)
    }
}

impl std::error::Error for MisusePolicyParseError {}

impl FromStr for MisusePolicy {
    type Err = MisusePolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("ignore") {
            Ok(Self::Ignore)
        } else if trimmed.eq_ignore_ascii_case("reject") {
            Ok(Self::Reject)
        } else if trimmed.eq_ignore_ascii_case("panic") {
            Ok(Self::Panic)
        } else {
            Err(MisusePolicyParseError(trimmed.to_string()))
        }
    }
}
