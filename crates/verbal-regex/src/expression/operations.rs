//! Semantic construction calls.

use super::ExpressionBuilder;
use crate::engine::Engine;
use crate::errors::MisuseError;
use crate::sanitize::Value;
use crate::shorthand::Shorthand;

impl<E: Engine> ExpressionBuilder<E> {
    /// Anchor the expression at the start of a line, or remove the anchor.
    pub fn anchor_start(&mut self, enable: bool) -> &mut Self {
        self.state.set_start_anchor(enable);
        self.recompile()
    }

    /// Anchor the expression at the end of a line, or remove the anchor.
    ///
    /// The anchor always stays outermost, after any pending closers.
    pub fn anchor_end(&mut self, enable: bool) -> &mut Self {
        self.state.set_end_anchor(enable);
        self.recompile()
    }

    /// Match `value` literally, as a non-capturing group.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.find("1+1");
    /// assert_eq!(expr.as_str(), r"(?:1\+1)");
    /// ```
    pub fn find<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.wrapped("(?:", value.into(), ")", "find")
    }

    /// Alias of [`find`](Self::find).
    pub fn literal<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.find(value)
    }

    /// Alias of [`find`](Self::find) that reads well mid-chain.
    pub fn then<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.find(value)
    }

    /// Match `value` zero or one time.
    pub fn optional<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.wrapped("(?:", value.into(), ")?", "optional")
    }

    /// Turn everything assembled so far into the first branch of an
    /// alternation; later calls build the next branch.
    ///
    /// While a capture is open the alternation is scoped to the capture's
    /// contents. With nothing to alternate with yet, the call does nothing.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.find("cat").alternate().find("dog");
    /// assert_eq!(expr.as_str(), "(?:(?:(?:cat))|(?:(?:dog)))");
    /// ```
    pub fn alternate(&mut self) -> &mut Self {
        if !self.state.open_alternation() {
            log::debug!("alternation has no preceding branch; nothing to alternate with");
        }
        self.recompile()
    }

    /// [`alternate`](Self::alternate), then [`find`](Self::find) `value`.
    pub fn alternate_with<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.alternate().find(value)
    }

    /// Match any run of characters, including none.
    pub fn any_character_sequence(&mut self) -> &mut Self {
        self.shorthand(Shorthand::AnyCharacterSequence)
    }

    /// Match any run of characters not in `chars`, including none.
    ///
    /// With nothing to exclude this matches any run of characters, newlines
    /// included.
    pub fn any_character_except<'a>(&mut self, chars: impl Into<Value<'a>>) -> &mut Self {
        self.class(
            ("(?:[^", "]*)"),
            chars.into(),
            "(?:(?s:.)*)",
            "any_character_except",
        )
    }

    /// Match a non-empty run of any characters.
    pub fn at_least_one_character(&mut self) -> &mut Self {
        self.shorthand(Shorthand::AtLeastOneCharacter)
    }

    /// Match a non-empty run of characters not in `chars`.
    pub fn at_least_one_character_except<'a>(
        &mut self,
        chars: impl Into<Value<'a>>,
    ) -> &mut Self {
        self.class(
            ("(?:[^", "]+)"),
            chars.into(),
            "(?:(?s:.)+)",
            "at_least_one_character_except",
        )
    }

    /// Match one character from `chars`.
    ///
    /// With no characters given nothing can match.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.one_of(["a", "b", "c"]);
    /// assert_eq!(expr.as_str(), "[abc]");
    /// ```
    pub fn one_of<'a>(&mut self, chars: impl Into<Value<'a>>) -> &mut Self {
        self.class(("[", "]"), chars.into(), r"[^\s\S]", "one_of")
    }

    /// Append a character class around the sanitized `chars`.
    ///
    /// Engines reject an empty class, so when `chars` sanitizes to nothing
    /// the call reports the empty value and appends `degenerate` instead.
    fn class(
        &mut self,
        (open, close): (&str, &str),
        chars: Value<'_>,
        degenerate: &str,
        operation: &'static str,
    ) -> &mut Self {
        let absent = chars.is_absent();
        let inner = self.fragment(chars, operation);
        if !inner.is_empty() {
            return self.add(&format!("{open}{inner}{close}"));
        }
        if !absent {
            self.report(MisuseError::EmptyValue(operation));
        }
        self.add(degenerate)
    }

    /// Assert that `value` does not follow, without consuming input.
    ///
    /// Needs an engine with lookaround support, such as
    /// [`FancyEngine`](crate::FancyEngine).
    pub fn not_followed_by<'a>(&mut self, value: impl Into<Value<'a>>) -> &mut Self {
        self.wrapped("(?!", value.into(), ")", "not_followed_by")
    }

    /// Match one character from the ranges given as consecutive
    /// `(from, to)` bounds.
    ///
    /// A trailing unpaired bound is ignored; with no complete pair the call
    /// does nothing.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.range(["a", "z", "0", "9"]);
    /// assert_eq!(expr.as_str(), "[a-z0-9]");
    /// ```
    pub fn range<'a, I>(&mut self, bounds: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value<'a>>,
    {
        let mut bounds = bounds.into_iter().map(Into::<Value<'a>>::into);
        let mut class = String::from("[");
        let mut pairs = 0usize;
        while let Some(from) = bounds.next() {
            let Some(to) = bounds.next() else {
                self.report(MisuseError::UnpairedRangeBound);
                break;
            };
            from.sanitize_into(&mut class);
            class.push('-');
            to.sanitize_into(&mut class);
            pairs += 1;
        }
        if pairs == 0 {
            self.report(MisuseError::EmptyValue("range"));
            return self;
        }
        class.push(']');
        self.add(&class)
    }

    /// Match a line terminator: `\r\n`, `\r` or `\n`.
    pub fn line_break(&mut self) -> &mut Self {
        self.shorthand(Shorthand::LineBreak)
    }

    /// Alias of [`line_break`](Self::line_break).
    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    /// Match a tab.
    pub fn tab(&mut self) -> &mut Self {
        self.shorthand(Shorthand::Tab)
    }

    /// Match one or more word characters.
    pub fn word(&mut self) -> &mut Self {
        self.shorthand(Shorthand::Word)
    }

    /// Match a single digit.
    pub fn digit(&mut self) -> &mut Self {
        self.shorthand(Shorthand::Digit)
    }

    /// Match a single whitespace character.
    pub fn whitespace(&mut self) -> &mut Self {
        self.shorthand(Shorthand::Whitespace)
    }

    fn shorthand(&mut self, shorthand: Shorthand) -> &mut Self {
        self.add(shorthand.fragment())
    }

    /// Repeat the previous item exactly `n` times (`[n]`) or between `n` and
    /// `m` times (`[n, m]`).
    ///
    /// Any other number of counts is ignored.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.digit().repeat_exactly_or_between(&[2, 4]);
    /// assert_eq!(expr.as_str(), r"\d{2,4}");
    /// ```
    pub fn repeat_exactly_or_between(&mut self, counts: &[u32]) -> &mut Self {
        match counts {
            [exact] => self.add(&format!("{{{exact}}}")),
            [lower, upper] => self.add(&format!("{{{lower},{upper}}}")),
            _ => {
                self.report(MisuseError::RepeatArity(counts.len()));
                self
            }
        }
    }

    /// Repeat the previous item one or more times.
    pub fn one_or_more(&mut self) -> &mut Self {
        self.add("+")
    }

    /// Repeat `value` (or, when it is empty, the previous item).
    ///
    /// Without bounds the repetition is `*`; with only `lower` it is
    /// `{lower,}`; with both it is `{lower,upper}`. An `upper` bound without
    /// `lower` adds no quantifier.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.repeat("ab", Some(2), None).digit().repeat((), None, None);
    /// assert_eq!(expr.as_str(), r"(?:ab){2,}\d*");
    /// ```
    pub fn repeat<'a>(
        &mut self,
        value: impl Into<Value<'a>>,
        lower: Option<u32>,
        upper: Option<u32>,
    ) -> &mut Self {
        let value = value.into();
        if !value.is_absent() {
            self.wrapped("(?:", value, ")", "repeat");
        }
        match (lower, upper) {
            (None, None) => self.add("*"),
            (Some(lower), None) => self.add(&format!("{{{lower},}}")),
            (Some(lower), Some(upper)) => self.add(&format!("{{{lower},{upper}}}")),
            (None, Some(_)) => {
                self.report(MisuseError::UpperBoundWithoutLower);
                self
            }
        }
    }

    /// Open a capture group; the pending `)` waits in the suffix.
    pub fn begin_capture(&mut self) -> &mut Self {
        self.state.open_capture();
        self.recompile()
    }

    /// Close the innermost open capture group.
    ///
    /// Alternations opened inside the capture are closed with it. Without an
    /// open capture the call does nothing.
    pub fn end_capture(&mut self) -> &mut Self {
        if !self.state.close_capture() {
            self.report(MisuseError::EndCaptureWithoutBegin);
        }
        self.recompile()
    }
}
