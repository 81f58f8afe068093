//! Engine backed by the `regex` crate.
//!
//! Matching runs in linear time, at the cost of rejecting lookaround: an
//! expression using `not_followed_by` fails to compile here.

use regex::Regex;

use super::{Engine, MatchMode, Matcher, splice, sticky_walk};
use crate::capture::collect_groups;
use crate::compiled::CompiledPattern;
use crate::errors::PatternError;

/// Compiles expressions with [`regex::Regex`].
///
/// # Examples
/// ```
/// use verbal_regex::{BuilderConfig, ExpressionBuilder, RegexEngine};
/// let mut digits = ExpressionBuilder::with_engine(RegexEngine, BuilderConfig::default());
/// digits.digit().one_or_more();
/// assert!(digits.test("abc 42").expect("pattern compiles"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexEngine;

/// A matcher produced by [`RegexEngine`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    mode: MatchMode,
}

impl RegexMatcher {
    /// The underlying compiled regex.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Engine for RegexEngine {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &CompiledPattern) -> Result<Self::Matcher, PatternError> {
        let regex = Regex::new(&pattern.engine_source())?;
        Ok(RegexMatcher {
            regex,
            mode: MatchMode::from_flags(pattern.flags()),
        })
    }
}

impl Matcher for RegexMatcher {
    fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn is_match(&self, haystack: &str) -> Result<bool, PatternError> {
        if self.mode.sticky {
            return Ok(self
                .regex
                .find_at(haystack, 0)
                .is_some_and(|m| m.start() == 0));
        }
        Ok(self.regex.is_match(haystack))
    }

    fn find_all(&self, haystack: &str) -> Result<Vec<String>, PatternError> {
        if self.mode.sticky {
            let found = sticky_walk(haystack, self.mode.global, |pos| {
                Ok(self.regex.find_at(haystack, pos).map(|m| (m.range(), ())))
            })?;
            return Ok(found
                .into_iter()
                .map(|(span, ())| haystack.get(span).unwrap_or_default().to_owned())
                .collect());
        }
        let found = if self.mode.global {
            self.regex
                .find_iter(haystack)
                .map(|m| m.as_str().to_owned())
                .collect()
        } else {
            self.regex
                .find(haystack)
                .map(|m| m.as_str().to_owned())
                .into_iter()
                .collect()
        };
        Ok(found)
    }

    fn captures(&self, haystack: &str) -> Result<Option<Vec<String>>, PatternError> {
        let caps = self
            .regex
            .captures(haystack)
            .filter(|caps| !self.mode.sticky || caps.get(0).is_some_and(|m| m.start() == 0));
        Ok(caps.map(|caps| {
            collect_groups(caps.iter().skip(1).map(|group| group.map(|m| m.as_str())))
        }))
    }

    fn replace(&self, haystack: &str, replacement: &str) -> Result<String, PatternError> {
        if self.mode.sticky {
            let found = sticky_walk(haystack, self.mode.global, |pos| {
                Ok(self.regex.captures_at(haystack, pos).and_then(|caps| {
                    let whole = caps.get(0)?;
                    let mut expanded = String::new();
                    caps.expand(replacement, &mut expanded);
                    Some((whole.range(), expanded))
                }))
            })?;
            return Ok(splice(haystack, found));
        }
        Ok(self
            .regex
            .replacen(haystack, self.mode.replacement_limit(), replacement)
            .into_owned())
    }
}
