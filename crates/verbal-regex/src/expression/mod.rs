//! The expression builder.
//!
//! Every construction call mutates the [`ExpressionState`], recompiles the
//! derived [`CompiledPattern`] and returns the builder for chaining. Matching
//! calls hand the compiled pattern to the injected [`Engine`].

mod modifiers;
mod operations;
mod state;

use std::borrow::Cow;
use std::cell::OnceCell;
use std::fmt;

use verbal_regex_policy::MisusePolicy;

use crate::compiled::CompiledPattern;
use crate::config::BuilderConfig;
use crate::engine::{Engine, FancyEngine, Matcher};
use crate::errors::{MisuseError, PatternError};
use crate::flags::FlagSet;
use crate::sanitize::Value;
use state::ExpressionState;

/// Assembles a regular expression from a chain of named calls.
///
/// # Examples
/// ```
/// use verbal_regex::ExpressionBuilder;
///
/// let mut expr = ExpressionBuilder::new();
/// expr.find("id").begin_capture().digit().one_or_more().end_capture();
/// assert_eq!(expr.as_str(), r"(?:id)(\d+)");
/// let captures = expr.captures("user id42").expect("pattern compiles");
/// assert_eq!(captures, Some(vec!["42".to_string()]));
/// ```
pub struct ExpressionBuilder<E: Engine = FancyEngine> {
    state: ExpressionState,
    compiled: CompiledPattern,
    engine: E,
    policy: MisusePolicy,
    misuse: Option<MisuseError>,
    matcher: OnceCell<E::Matcher>,
}

impl ExpressionBuilder<FancyEngine> {
    /// Create a builder with the default configuration and engine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a builder with `config` and the default engine.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_engine(FancyEngine::default(), config)
    }
}

impl Default for ExpressionBuilder<FancyEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> ExpressionBuilder<E> {
    /// Create a builder that delegates matching to `engine`.
    #[must_use]
    pub fn with_engine(engine: E, config: BuilderConfig) -> Self {
        let state = ExpressionState::new(config.default_flags);
        let compiled = state.compile();
        Self {
            state,
            compiled,
            engine,
            policy: config.misuse_policy,
            misuse: None,
            matcher: OnceCell::new(),
        }
    }

    /// Append a fragment to the body verbatim.
    ///
    /// Every other construction call routes through here or through the
    /// closer stack; both end in a recompile.
    pub fn add(&mut self, fragment: &str) -> &mut Self {
        self.state.push_str(fragment);
        self.recompile()
    }

    fn recompile(&mut self) -> &mut Self {
        self.compiled = self.state.compile();
        self.matcher = OnceCell::new();
        self
    }

    /// Sanitize `value`, reporting an absent value as misuse of `operation`.
    fn fragment(&mut self, value: Value<'_>, operation: &'static str) -> String {
        if value.is_absent() {
            self.report(MisuseError::EmptyValue(operation));
        }
        let mut fragment = String::new();
        value.sanitize_into(&mut fragment);
        fragment
    }

    /// Append `open`, the sanitized value and `close` as one fragment.
    fn wrapped(
        &mut self,
        open: &str,
        value: Value<'_>,
        close: &str,
        operation: &'static str,
    ) -> &mut Self {
        let inner = self.fragment(value, operation);
        self.add(&format!("{open}{inner}{close}"))
    }

    fn report(&mut self, misuse: MisuseError) {
        if self.policy.panics() {
            panic!("expression builder misuse: {misuse}");
        }
        if self.policy.records() {
            log::warn!("expression builder misuse recorded: {misuse}");
            self.misuse.get_or_insert(misuse);
        } else {
            log::warn!("ignoring expression builder misuse: {misuse}");
        }
    }

    /// Fragment materialized before the body.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.state.prefix()
    }

    /// The accumulated body.
    #[must_use]
    pub fn body(&self) -> &str {
        self.state.body()
    }

    /// Fragment materialized after the body, innermost closer first.
    #[must_use]
    pub fn suffix(&self) -> String {
        self.state.suffix()
    }

    /// The active flags.
    #[must_use]
    pub const fn flags(&self) -> FlagSet {
        self.state.flags()
    }

    /// The derived pattern and flags.
    #[must_use]
    pub const fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// The assembled pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.compiled.pattern()
    }

    /// Number of capture groups opened but not yet ended.
    #[must_use]
    pub fn open_captures(&self) -> usize {
        self.state.open_captures()
    }

    /// The misuse policy in force.
    #[must_use]
    pub const fn misuse_policy(&self) -> MisusePolicy {
        self.policy
    }

    /// The first misuse recorded under [`MisusePolicy::Reject`].
    #[must_use]
    pub const fn misuse(&self) -> Option<&MisuseError> {
        self.misuse.as_ref()
    }

    /// The engine matchers are built with.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Build (or reuse) the matcher for the current pattern.
    ///
    /// The matcher is cached until the next construction call.
    ///
    /// # Errors
    /// Returns [`PatternError::Misuse`] when a misuse was recorded under
    /// [`MisusePolicy::Reject`], or the engine's error when it rejects the
    /// pattern.
    pub fn to_matcher(&self) -> Result<&E::Matcher, PatternError> {
        if let Some(misuse) = &self.misuse {
            return Err(PatternError::Misuse(misuse.clone()));
        }
        if let Some(matcher) = self.matcher.get() {
            return Ok(matcher);
        }
        let matcher = self.engine.compile(&self.compiled).inspect_err(|err| {
            log::debug!("failed to compile expression {}: {err}", self.compiled);
        })?;
        Ok(self.matcher.get_or_init(|| matcher))
    }

    /// Returns `true` if the expression matches anywhere in `text`.
    ///
    /// # Errors
    /// See [`to_matcher`](Self::to_matcher); also engine runtime failures.
    pub fn test(&self, text: &str) -> Result<bool, PatternError> {
        self.to_matcher()?.is_match(text)
    }

    /// Matched text: every match with the global flag, else the first.
    ///
    /// # Errors
    /// See [`to_matcher`](Self::to_matcher); also engine runtime failures.
    pub fn matches(&self, text: &str) -> Result<Vec<String>, PatternError> {
        self.to_matcher()?.find_all(text)
    }

    /// Capture groups of the first match, group 0 excluded.
    ///
    /// # Errors
    /// See [`to_matcher`](Self::to_matcher); also engine runtime failures.
    pub fn captures(&self, text: &str) -> Result<Option<Vec<String>>, PatternError> {
        self.to_matcher()?.captures(text)
    }

    /// Replace matches in `text`: every match with the global flag, else the
    /// first. `$n` in `replacement` expands capture group `n`.
    ///
    /// # Errors
    /// See [`to_matcher`](Self::to_matcher); also engine runtime failures.
    pub fn replace(&self, text: &str, replacement: &str) -> Result<String, PatternError> {
        self.to_matcher()?.replace(text, replacement)
    }
}

impl<E: Engine + Clone> Clone for ExpressionBuilder<E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            compiled: self.compiled.clone(),
            engine: self.engine.clone(),
            policy: self.policy,
            misuse: self.misuse.clone(),
            matcher: OnceCell::new(),
        }
    }
}

impl<E: Engine + fmt::Debug> fmt::Debug for ExpressionBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionBuilder")
            .field("state", &self.state)
            .field("compiled", &self.compiled)
            .field("engine", &self.engine)
            .field("policy", &self.policy)
            .field("misuse", &self.misuse)
            .finish_non_exhaustive()
    }
}

impl<E: Engine> fmt::Display for ExpressionBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.compiled, f)
    }
}

impl<'a, E: Engine> From<&'a ExpressionBuilder<E>> for Value<'a> {
    fn from(value: &'a ExpressionBuilder<E>) -> Self {
        Self::Raw(Cow::Borrowed(value.as_str()))
    }
}
