//! Conversion of caller values into pattern fragments.
//!
//! Text is escaped so it matches only itself, numbers are stringified, and
//! raw fragments (including compiled regexes) pass through untouched.

use std::borrow::Cow;

/// Characters escaped with a backslash when text is sanitized.
const METACHARACTERS: [char; 16] = [
    ']', '.', '|', '*', '?', '+', '(', ')', '{', '}', '^', '$', '\\', ':', '=', '[',
];

/// A pattern fragment that is inserted verbatim, without escaping.
///
/// # Examples
/// ```
/// use verbal_regex::{Raw, sanitize};
/// assert_eq!(sanitize(Raw(r"\d+")), r"\d+");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<'a>(pub &'a str);

/// A value accepted wherever the builder takes a literal.
///
/// Built through the `From` conversions: strings and characters become
/// [`Value::Text`], numbers [`Value::Number`], [`Raw`] and compiled regexes
/// [`Value::Raw`], arrays and vectors [`Value::Sequence`], and `None` or `()`
/// [`Value::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// Literal text, escaped on sanitization.
    Text(Cow<'a, str>),
    /// A stringified number, never escaped.
    Number(String),
    /// A fragment that is already valid pattern syntax.
    Raw(Cow<'a, str>),
    /// Values sanitized one by one and concatenated.
    Sequence(Vec<Value<'a>>),
    /// Nothing; sanitizes to the empty fragment.
    Empty,
}

impl Value<'_> {
    /// Returns `true` for [`Value::Empty`], the value built from `None` or
    /// `()`.
    ///
    /// Present values may still sanitize to nothing: `Value::from("")` is
    /// not absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn sanitize_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(text, out),
            Self::Number(text) => out.push_str(text),
            Self::Raw(fragment) => out.push_str(fragment),
            Self::Sequence(items) => {
                for item in items {
                    item.sanitize_into(out);
                }
            }
            Self::Empty => {}
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    out.reserve(text.len());
    for ch in text.chars() {
        if METACHARACTERS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Turn a value into a pattern fragment.
///
/// Sanitizing is not idempotent: an already escaped fragment has its
/// backslashes escaped again, so callers must sanitize each value once.
///
/// # Examples
/// ```
/// use verbal_regex::sanitize;
/// assert_eq!(sanitize("a.b"), r"a\.b");
/// assert_eq!(sanitize(1.5), "1.5");
/// assert_eq!(sanitize(["(", ")"]), r"\(\)");
/// assert_eq!(sanitize(None::<&str>), "");
/// ```
#[must_use]
pub fn sanitize<'a>(value: impl Into<Value<'a>>) -> String {
    let mut out = String::new();
    value.into().sanitize_into(&mut out);
    out
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

macro_rules! number_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Self::Number(value.to_string())
                }
            }
        )*
    };
}

number_values!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<'a> From<Raw<'a>> for Value<'a> {
    fn from(value: Raw<'a>) -> Self {
        Self::Raw(Cow::Borrowed(value.0))
    }
}

impl<'a> From<&'a regex::Regex> for Value<'a> {
    fn from(value: &'a regex::Regex) -> Self {
        Self::Raw(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<&'a fancy_regex::Regex> for Value<'a> {
    fn from(value: &'a fancy_regex::Regex) -> Self {
        Self::Raw(Cow::Borrowed(value.as_str()))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<()> for Value<'_> {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl<'a, T: Into<Value<'a>>, const N: usize> From<[T; N]> for Value<'a> {
    fn from(value: [T; N]) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Clone + Into<Value<'a>>> From<&'a [T]> for Value<'a> {
    fn from(value: &'a [T]) -> Self {
        Self::Sequence(value.iter().cloned().map(Into::into).collect())
    }
}
