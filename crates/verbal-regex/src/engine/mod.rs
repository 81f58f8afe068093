//! Matching engines the builder delegates to.
//!
//! An [`Engine`] turns a [`CompiledPattern`] into a [`Matcher`]. The builder
//! never matches text itself; it owns an engine value and asks it for a
//! matcher whenever a delegation call needs one.

mod fancy;
mod standard;

use std::ops::Range;

use crate::compiled::CompiledPattern;
use crate::errors::PatternError;
use crate::flags::{Flag, FlagSet};

pub use fancy::{FancyEngine, FancyMatcher};
pub use standard::{RegexEngine, RegexMatcher};

/// A compiled pattern ready to run against text.
///
/// `find_all` and `replace` honour the global flag the matcher was compiled
/// with: every match when it is set, the first match otherwise. With the
/// sticky flag every match must start where the previous one ended (the
/// first at the start of the haystack), and matching stops at the first gap.
pub trait Matcher {
    /// The source handed to the underlying engine.
    fn as_str(&self) -> &str;

    /// Returns `true` if the pattern matches anywhere in `haystack`.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the engine fails while matching.
    fn is_match(&self, haystack: &str) -> Result<bool, PatternError>;

    /// Collect the matched text.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the engine fails while matching.
    fn find_all(&self, haystack: &str) -> Result<Vec<String>, PatternError>;

    /// Capture groups of the first match, group 0 excluded.
    ///
    /// Returns `None` when nothing matches.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the engine fails while matching.
    fn captures(&self, haystack: &str) -> Result<Option<Vec<String>>, PatternError>;

    /// Substitute `replacement` for the matched text; `$n` expands group `n`.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the engine fails while matching.
    fn replace(&self, haystack: &str, replacement: &str) -> Result<String, PatternError>;
}

/// Builds matchers from compiled patterns.
pub trait Engine {
    /// The matcher type this engine produces.
    type Matcher: Matcher;

    /// Compile `pattern` into a matcher.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the engine rejects the pattern.
    fn compile(&self, pattern: &CompiledPattern) -> Result<Self::Matcher, PatternError>;
}

/// How a matcher walks the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchMode {
    global: bool,
    sticky: bool,
}

impl MatchMode {
    const fn from_flags(flags: FlagSet) -> Self {
        Self {
            global: flags.contains(Flag::Global),
            sticky: flags.contains(Flag::Sticky),
        }
    }

    /// Number of replacements for a non-sticky matcher: `0` means all.
    const fn replacement_limit(self) -> usize {
        if self.global { 0 } else { 1 }
    }
}

/// A match found by a positional search, with whatever the caller derived
/// from it.
type Found<T> = (Range<usize>, T);

/// Collect sticky matches: each must start exactly where the previous one
/// ended, beginning at `0`.
///
/// `search(pos)` returns the leftmost match at or after `pos`. An empty match
/// moves the next attempt one character on. Without `global` at most one
/// match is collected.
fn sticky_walk<T>(
    haystack: &str,
    global: bool,
    mut search: impl FnMut(usize) -> Result<Option<Found<T>>, PatternError>,
) -> Result<Vec<Found<T>>, PatternError> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some((span, item)) = search(pos)? {
        if span.start != pos {
            break;
        }
        let next = if span.is_empty() {
            haystack
                .get(pos..)
                .and_then(|rest| rest.chars().next())
                .map(|ch| pos + ch.len_utf8())
        } else {
            Some(span.end)
        };
        found.push((span, item));
        match next {
            Some(next) if global => pos = next,
            _ => break,
        }
    }
    Ok(found)
}

/// Splice `replacements` into `haystack`, keeping the text between them.
fn splice(haystack: &str, replacements: Vec<Found<String>>) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (span, replacement) in replacements {
        out.push_str(haystack.get(last..span.start).unwrap_or_default());
        out.push_str(&replacement);
        last = span.end;
    }
    out.push_str(haystack.get(last..).unwrap_or_default());
    out
}
