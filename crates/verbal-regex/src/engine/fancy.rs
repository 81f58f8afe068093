//! Engine backed by the `fancy-regex` crate.
//!
//! `fancy-regex` adds backtracking features such as lookaround on top of
//! `regex`, and delegates to it whenever a pattern does not need them.

use fancy_regex::{Regex, RegexBuilder};

use super::{Engine, Found, MatchMode, Matcher, splice, sticky_walk};
use crate::capture::collect_groups;
use crate::compiled::CompiledPattern;
use crate::errors::PatternError;

/// Compiles expressions with [`fancy_regex::Regex`]; the default engine.
///
/// # Examples
/// ```
/// use verbal_regex::{BuilderConfig, ExpressionBuilder, FancyEngine};
/// let engine = FancyEngine::new().with_backtrack_limit(10_000);
/// let mut expr = ExpressionBuilder::with_engine(engine, BuilderConfig::default());
/// expr.find("q").not_followed_by("u");
/// assert!(expr.test("Iraq").expect("pattern compiles"));
/// assert!(!expr.test("quit").expect("pattern compiles"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FancyEngine {
    backtrack_limit: Option<usize>,
}

impl FancyEngine {
    /// Create an engine with `fancy-regex`'s default limits.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backtrack_limit: None,
        }
    }

    /// Cap the number of backtracking steps a single match may take.
    #[must_use]
    pub const fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }
}

/// A matcher produced by [`FancyEngine`].
#[derive(Debug, Clone)]
pub struct FancyMatcher {
    regex: Regex,
    mode: MatchMode,
}

impl FancyMatcher {
    /// The underlying compiled regex.
    #[must_use]
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Engine for FancyEngine {
    type Matcher = FancyMatcher;

    fn compile(&self, pattern: &CompiledPattern) -> Result<Self::Matcher, PatternError> {
        let source = pattern.engine_source();
        let mut builder = RegexBuilder::new(&source);
        if let Some(limit) = self.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        Ok(FancyMatcher {
            regex: builder.build()?,
            mode: MatchMode::from_flags(pattern.flags()),
        })
    }
}

impl FancyMatcher {
    fn find_span(&self, haystack: &str, pos: usize) -> Result<Option<Found<()>>, PatternError> {
        Ok(self
            .regex
            .find_from_pos(haystack, pos)?
            .map(|m| (m.range(), ())))
    }
}

impl Matcher for FancyMatcher {
    fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn is_match(&self, haystack: &str) -> Result<bool, PatternError> {
        if self.mode.sticky {
            let found = self.find_span(haystack, 0)?;
            return Ok(found.is_some_and(|(span, ())| span.start == 0));
        }
        Ok(self.regex.is_match(haystack)?)
    }

    fn find_all(&self, haystack: &str) -> Result<Vec<String>, PatternError> {
        if self.mode.sticky {
            let found =
                sticky_walk(haystack, self.mode.global, |pos| self.find_span(haystack, pos))?;
            return Ok(found
                .into_iter()
                .map(|(span, ())| haystack.get(span).unwrap_or_default().to_owned())
                .collect());
        }
        if self.mode.global {
            self.regex
                .find_iter(haystack)
                .map(|found| {
                    found
                        .map(|m| m.as_str().to_owned())
                        .map_err(PatternError::from)
                })
                .collect()
        } else {
            Ok(self
                .regex
                .find(haystack)?
                .map(|m| m.as_str().to_owned())
                .into_iter()
                .collect())
        }
    }

    fn captures(&self, haystack: &str) -> Result<Option<Vec<String>>, PatternError> {
        let caps = self
            .regex
            .captures(haystack)?
            .filter(|caps| !self.mode.sticky || caps.get(0).is_some_and(|m| m.start() == 0));
        Ok(caps.map(|caps| {
            collect_groups(caps.iter().skip(1).map(|group| group.map(|m| m.as_str())))
        }))
    }

    fn replace(&self, haystack: &str, replacement: &str) -> Result<String, PatternError> {
        if self.mode.sticky {
            let found = sticky_walk(haystack, self.mode.global, |pos| {
                let Some(caps) = self.regex.captures_from_pos(haystack, pos)? else {
                    return Ok(None);
                };
                let Some(whole) = caps.get(0) else {
                    return Ok(None);
                };
                let mut expanded = String::new();
                caps.expand(replacement, &mut expanded);
                Ok(Some((whole.range(), expanded)))
            })?;
            return Ok(splice(haystack, found));
        }
        Ok(self
            .regex
            .try_replacen(haystack, self.mode.replacement_limit(), replacement)?
            .into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagSet;

    fn matcher(pattern: &str, flags: &str) -> FancyMatcher {
        let flags: FlagSet = match flags.parse() {
            Ok(flags) => flags,
            Err(err) => panic!("flags should parse: {err}"),
        };
        match FancyEngine::new().compile(&CompiledPattern::new(pattern, flags)) {
            Ok(matcher) => matcher,
            Err(err) => panic!("pattern {pattern:?} should compile: {err}"),
        }
    }

    #[test]
    fn supports_negative_lookahead() {
        let matcher = matcher("foo(?!bar)", "");
        assert!(matches!(matcher.is_match("foobaz"), Ok(true)));
        assert!(matches!(matcher.is_match("foobar"), Ok(false)));
    }

    #[test]
    fn global_finds_every_match() {
        let found = matcher(r"\w+", "g").find_all("one two");
        assert_eq!(found.ok(), Some(vec!["one".into(), "two".into()]));
    }

    #[test]
    fn without_global_finds_first_match() {
        let found = matcher(r"\w+", "m").find_all("one two");
        assert_eq!(found.ok(), Some(vec!["one".into()]));
    }

    #[test]
    fn replace_honours_global_flag() {
        assert_eq!(matcher("a", "g").replace("banana", "o").ok().as_deref(), Some("bonono"));
        assert_eq!(matcher("a", "").replace("banana", "o").ok().as_deref(), Some("bonana"));
    }

    #[test]
    fn multiline_anchors_match_at_line_boundaries() {
        let matcher = matcher("^b$", "m");
        assert!(matches!(matcher.is_match("a\nb\nc"), Ok(true)));
    }

    #[test]
    fn dot_all_flag_spans_newlines() {
        assert!(matches!(matcher("a.b", "s").is_match("a\nb"), Ok(true)));
        assert!(matches!(matcher("a.b", "").is_match("a\nb"), Ok(false)));
    }

    #[test]
    fn reports_unbalanced_groups() {
        let result = FancyEngine::new().compile(&CompiledPattern::new("(a", FlagSet::EMPTY));
        assert!(matches!(result, Err(PatternError::FancyRegex(_))));
    }

    #[test]
    fn sticky_global_stops_at_first_gap() {
        let matcher = matcher(r"\d", "gy");
        let found = matcher.find_all("123a4");
        assert_eq!(found.ok(), Some(vec!["1".into(), "2".into(), "3".into()]));
        assert_eq!(matcher.replace("123a4", "#").ok().as_deref(), Some("###a4"));
    }

    #[test]
    fn sticky_walk_honours_lookahead() {
        let found = matcher(r"\d(?!x)", "gy").find_all("12x3");
        assert_eq!(found.ok(), Some(vec!["1".into()]));
    }

    #[test]
    fn sticky_replace_expands_groups() {
        let replaced = matcher(r"(\w)(\d)", "gy").replace("a1b2 c3", "$2$1");
        assert_eq!(replaced.ok().as_deref(), Some("1a2b c3"));
    }

    #[test]
    fn sticky_requires_match_at_start() {
        let matcher = matcher("b", "y");
        assert!(matches!(matcher.is_match("ab"), Ok(false)));
        assert!(matches!(matcher.is_match("ba"), Ok(true)));
    }

    #[test]
    fn captures_groups_of_first_match() {
        let captures = matcher(r"(\d)(x)?", "g").captures("a1b2");
        assert_eq!(captures.ok().flatten(), Some(vec!["1".into(), String::new()]));
    }
}
