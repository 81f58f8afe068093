//! Fluent construction of regular expressions from readable calls.
//!
//! [`ExpressionBuilder`] assembles a pattern from semantically named steps
//! ("start of line", "then this literal", "one or more of") and keeps a
//! [`CompiledPattern`] in sync after every call. Matching is delegated to an
//! injected [`Engine`]; [`FancyEngine`] (the default) and [`RegexEngine`]
//! ship with the crate.
//!
//! ```
//! use verbal_regex::ExpressionBuilder;
//!
//! let mut url = ExpressionBuilder::new();
//! url.anchor_start(true)
//!     .find("http")
//!     .optional("s")
//!     .find("://")
//!     .optional("www.")
//!     .any_character_except(" ")
//!     .anchor_end(true);
//! let matched = url
//!     .test("https://www.example.com")
//!     .expect("pattern compiles");
//! assert!(matched);
//! assert!(!url.test("ftp://example.com").expect("pattern compiles"));
//! ```

mod capture;
mod compiled;
mod config;
mod engine;
mod errors;
mod expression;
mod flags;
mod sanitize;
mod shorthand;

pub use compiled::CompiledPattern;
pub use config::{BuilderConfig, DEFAULT_FLAGS, FLAGS_ENV, MISUSE_ENV};
pub use engine::{Engine, FancyEngine, FancyMatcher, Matcher, RegexEngine, RegexMatcher};
pub use errors::{MisuseError, PatternError};
pub use expression::ExpressionBuilder;
pub use flags::{Flag, FlagParseError, FlagSet};
pub use sanitize::{Raw, Value, sanitize};
pub use shorthand::Shorthand;
pub use verbal_regex_policy::MisusePolicy;
