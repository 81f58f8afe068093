//! Flag management.
//!
//! Flags do not touch the prefix, body or suffix, but every change still
//! recompiles so the compiled pattern carries the new flags.

use super::ExpressionBuilder;
use crate::engine::Engine;
use crate::errors::MisuseError;
use crate::flags::Flag;

impl<E: Engine> ExpressionBuilder<E> {
    /// Add `flag`; adding a present flag changes nothing.
    pub fn add_flag(&mut self, flag: Flag) -> &mut Self {
        self.state.flags_mut().insert(flag);
        self.recompile()
    }

    /// Remove `flag`; removing an absent flag changes nothing.
    pub fn remove_flag(&mut self, flag: Flag) -> &mut Self {
        self.state.flags_mut().remove(flag);
        self.recompile()
    }

    /// Add the flag named by `modifier`, e.g. `'i'`.
    ///
    /// Characters outside the flag vocabulary are ignored.
    pub fn add_modifier(&mut self, modifier: char) -> &mut Self {
        match Flag::from_char(modifier) {
            Some(flag) => self.add_flag(flag),
            None => self.unknown_modifier(modifier),
        }
    }

    /// Remove the flag named by `modifier`.
    ///
    /// Characters outside the flag vocabulary are ignored.
    pub fn remove_modifier(&mut self, modifier: char) -> &mut Self {
        match Flag::from_char(modifier) {
            Some(flag) => self.remove_flag(flag),
            None => self.unknown_modifier(modifier),
        }
    }

    fn unknown_modifier(&mut self, modifier: char) -> &mut Self {
        self.report(MisuseError::UnknownModifier(modifier));
        self
    }

    fn toggle(&mut self, flag: Flag, enable: bool) -> &mut Self {
        if enable {
            self.add_flag(flag)
        } else {
            self.remove_flag(flag)
        }
    }

    /// Ignore case when `enable` is set.
    pub fn case_insensitive(&mut self, enable: bool) -> &mut Self {
        self.toggle(Flag::CaseInsensitive, enable)
    }

    /// Stop at the first match when `enable` is set (clears the global flag).
    ///
    /// # Examples
    /// ```
    /// use verbal_regex::ExpressionBuilder;
    /// let mut expr = ExpressionBuilder::new();
    /// expr.digit().first_match_only(true);
    /// assert_eq!(expr.flags().to_string(), "m");
    /// assert_eq!(expr.replace("1 2", "#").expect("pattern compiles"), "# 2");
    /// ```
    pub fn first_match_only(&mut self, enable: bool) -> &mut Self {
        self.toggle(Flag::Global, !enable)
    }

    /// Treat the input as a single line when `enable` is set (clears the
    /// multiline flag, so `^` and `$` only match at the ends of the input).
    pub fn single_line(&mut self, enable: bool) -> &mut Self {
        self.toggle(Flag::Multiline, !enable)
    }
}
