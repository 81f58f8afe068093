//! The compiled view of an expression: pattern text plus flags.

use std::fmt;

use crate::flags::{Flag, FlagSet};

/// Flags expressed as a leading inline group in the engine source.
const INLINE_FLAGS: [Flag; 3] = [Flag::CaseInsensitive, Flag::Multiline, Flag::DotAll];

/// Pattern text and flags derived from a builder's state.
///
/// This is a read-only value; the builder replaces it after every mutation.
///
/// # Examples
/// ```
/// use verbal_regex::{CompiledPattern, Flag, FlagSet};
/// let compiled = CompiledPattern::new("a+", FlagSet::EMPTY.with(Flag::CaseInsensitive));
/// assert_eq!(compiled.to_string(), "/a+/i");
/// assert_eq!(compiled.engine_source(), "(?i)a+");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    pattern: String,
    flags: FlagSet,
}

impl CompiledPattern {
    /// Pair a pattern with its flags.
    #[must_use]
    pub fn new(pattern: impl Into<String>, flags: FlagSet) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
        }
    }

    /// The assembled pattern: prefix, body and suffix.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The active flags.
    #[must_use]
    pub const fn flags(&self) -> FlagSet {
        self.flags
    }

    /// Render the source handed to an engine.
    ///
    /// `i`, `m` and `s` become a leading inline flag group. `g` and `y` are
    /// honoured by the matcher; `u` needs no translation because both
    /// engines match Unicode text.
    #[must_use]
    pub fn engine_source(&self) -> String {
        let inline: String = INLINE_FLAGS
            .into_iter()
            .filter(|flag| self.flags.contains(*flag))
            .map(Flag::as_char)
            .collect();
        let mut source = String::with_capacity(self.pattern.len() + inline.len() + 3);
        if !inline.is_empty() {
            source.push_str("(?");
            source.push_str(&inline);
            source.push(')');
        }
        source.push_str(&self.pattern);
        source
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(text: &str) -> FlagSet {
        match text.parse() {
            Ok(flags) => flags,
            Err(err) => panic!("flags {text:?} should parse: {err}"),
        }
    }

    #[test]
    fn matcher_flags_need_no_translation() {
        let compiled = CompiledPattern::new("abc", flags("guy"));
        assert_eq!(compiled.engine_source(), "abc");
    }

    #[test]
    fn inline_flags_keep_canonical_order() {
        let compiled = CompiledPattern::new("x", flags("sgmi"));
        assert_eq!(compiled.engine_source(), "(?ims)x");
    }

    #[test]
    fn displays_as_slash_delimited_literal() {
        let compiled = CompiledPattern::new(r"\d+", flags("gm"));
        assert_eq!(compiled.to_string(), r"/\d+/gm");
    }
}
