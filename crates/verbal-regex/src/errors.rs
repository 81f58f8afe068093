//! Error types shared by the builder and the matching engines.

use thiserror::Error;

/// A builder call that could not be honoured as written.
///
/// Builder calls degrade to a no-op (or an empty fragment) instead of
/// failing. The configured [`MisusePolicy`](crate::MisusePolicy) decides
/// whether the degradation is only logged, surfaced later as
/// [`PatternError::Misuse`], or turned into a panic.
///
/// # Examples
/// ```
/// use verbal_regex::MisuseError;
/// let err = MisuseError::RepeatArity(3);
/// assert_eq!(
///     err.to_string(),
///     "bounded repetition expects one or two counts, got 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MisuseError {
    /// `end_capture` was called with no capture group open.
    #[error("capture group closed without a matching begin")]
    EndCaptureWithoutBegin,
    /// `repeat_exactly_or_between` was given a count list of the wrong length.
    #[error("bounded repetition expects one or two counts, got {0}")]
    RepeatArity(usize),
    /// `repeat` was given an upper bound but no lower bound.
    #[error("repetition upper bound given without a lower bound")]
    UpperBoundWithoutLower,
    /// A modifier character outside the flag vocabulary.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(char),
    /// An operation received a value that sanitizes to nothing.
    #[error("`{0}` received an empty value")]
    EmptyValue(&'static str),
    /// `range` was given an odd number of bounds.
    #[error("range bounds must come in pairs; the trailing bound was ignored")]
    UnpairedRangeBound,
}

/// Errors surfaced when a matcher is built from an assembled expression.
///
/// # Examples
/// ```
/// use verbal_regex::{MisuseError, PatternError};
/// let err = PatternError::from(MisuseError::EndCaptureWithoutBegin);
/// assert_eq!(
///     err.to_string(),
///     "expression builder misuse: capture group closed without a matching begin"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// The `regex` engine rejected the assembled pattern.
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// The `fancy-regex` engine rejected the pattern or failed while matching.
    #[error(transparent)]
    FancyRegex(#[from] fancy_regex::Error),
    /// A misuse recorded under [`MisusePolicy::Reject`](crate::MisusePolicy::Reject).
    #[error("expression builder misuse: {0}")]
    Misuse(#[from] MisuseError),
}
