//! Fixed fragments appended by the argument-free builder calls.

/// A fixed pattern fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    /// Any line terminator: `\r\n`, `\r` or `\n`.
    LineBreak,
    /// A tab character.
    Tab,
    /// One or more word characters.
    Word,
    /// A single digit.
    Digit,
    /// A single whitespace character.
    Whitespace,
    /// Any run of characters, possibly empty.
    AnyCharacterSequence,
    /// Any non-empty run of characters.
    AtLeastOneCharacter,
}

impl Shorthand {
    /// Translate the shorthand into its pattern fragment.
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::Shorthand;
    /// assert_eq!(Shorthand::Digit.fragment(), r"\d");
    /// assert_eq!(Shorthand::LineBreak.fragment(), r"(?:\r\n|\r|\n)");
    /// ```
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::LineBreak => r"(?:\r\n|\r|\n)",
            Self::Tab => r"\t",
            Self::Word => r"\w+",
            Self::Digit => r"\d",
            Self::Whitespace => r"\s",
            Self::AnyCharacterSequence => "(?:.*)",
            Self::AtLeastOneCharacter => "(?:.+)",
        }
    }
}
