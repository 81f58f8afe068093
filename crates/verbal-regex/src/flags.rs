//! Mode flags and the set type that carries them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single-character mode switch drawn from the fixed flag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    /// `g`: report every match instead of stopping at the first.
    Global,
    /// `i`: ignore case.
    CaseInsensitive,
    /// `m`: `^` and `$` match at line boundaries.
    Multiline,
    /// `s`: `.` also matches `\n`.
    DotAll,
    /// `u`: Unicode-aware matching.
    Unicode,
    /// `y`: the match must begin at the start of the haystack.
    Sticky,
}

impl Flag {
    /// Every flag, in canonical display order.
    pub const ALL: [Self; 6] = [
        Self::Global,
        Self::CaseInsensitive,
        Self::Multiline,
        Self::DotAll,
        Self::Unicode,
        Self::Sticky,
    ];

    /// Return the flag's character.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_regex::Flag;
    ///
    /// assert_eq!(Flag::DotAll.as_char(), 's');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Global => 'g',
            Self::CaseInsensitive => 'i',
            Self::Multiline => 'm',
            Self::DotAll => 's',
            Self::Unicode => 'u',
            Self::Sticky => 'y',
        }
    }

    /// Look up a flag by its character.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_regex::Flag;
    ///
    /// assert_eq!(Flag::from_char('y'), Some(Flag::Sticky));
    /// assert_eq!(Flag::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(value: char) -> Option<Self> {
        match value {
            'g' => Some(Self::Global),
            'i' => Some(Self::CaseInsensitive),
            'm' => Some(Self::Multiline),
            's' => Some(Self::DotAll),
            'u' => Some(Self::Unicode),
            'y' => Some(Self::Sticky),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a character outside the flag vocabulary is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown flag `{0}`; expected one of g, i, m, s, u, y")]
pub struct FlagParseError(pub char);

impl TryFrom<char> for Flag {
    type Error = FlagParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value).ok_or(FlagParseError(value))
    }
}

/// A set of [`Flag`]s.
///
/// Stored as a bitset keyed by the flag enum, so duplicates and characters
/// outside the vocabulary cannot be represented.
///
/// # Examples
///
/// ```
/// use verbal_regex::{Flag, FlagSet};
///
/// let mut flags: FlagSet = "mg".parse().expect("valid flags");
/// assert!(!flags.insert(Flag::Global));
/// assert!(flags.insert(Flag::CaseInsensitive));
/// assert_eq!(flags.to_string(), "gim");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    /// The set with no flags.
    pub const EMPTY: Self = Self(0);

    /// Return a copy of the set with `flag` added.
    #[must_use]
    pub const fn with(self, flag: Flag) -> Self {
        Self(self.0 | flag.bit())
    }

    /// Return a copy of the set with `flag` removed.
    #[must_use]
    pub const fn without(self, flag: Flag) -> Self {
        Self(self.0 & !flag.bit())
    }

    /// Returns `true` if `flag` is in the set.
    #[must_use]
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Returns `true` if the set holds no flags.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of flags in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add `flag`, returning `true` if it was not already present.
    pub fn insert(&mut self, flag: Flag) -> bool {
        let added = !self.contains(flag);
        *self = self.with(flag);
        added
    }

    /// Remove `flag`, returning `true` if it was present.
    pub fn remove(&mut self, flag: Flag) -> bool {
        let removed = self.contains(flag);
        *self = self.without(flag);
        removed
    }

    /// Iterate over the flags in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|flag| write!(f, "{flag}"))
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:?})", self.to_string())
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl FromStr for FlagSet {
    type Err = FlagParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().chars().map(Flag::try_from).collect()
    }
}
