//! Assembly state: prefix, body, pending closers and flags.
//!
//! The suffix is not stored as text. It is rendered from a stack of pending
//! closers, each tagged with the call that opened it, so closing a capture
//! only ever removes what that capture (and alternations scoped inside it)
//! added.

use crate::compiled::CompiledPattern;
use crate::flags::FlagSet;

/// A fragment waiting in the suffix for a later call to materialize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closer {
    /// The `$` anchor; always the outermost closer.
    EndAnchor,
    /// An open capture group whose `(` sits at `open_at` in the body.
    Capture { open_at: usize },
    /// The first top-level alternation. It also owns the group wrapping
    /// every branch, so anchors bind to the whole alternation.
    RootAlternation,
    /// A further top-level alternation.
    Alternation,
    /// An alternation scoped to the innermost open capture.
    CaptureAlternation,
}

impl Closer {
    const fn prefix(self) -> &'static str {
        match self {
            Self::RootAlternation => "(?:(?:",
            Self::Alternation => "(?:",
            Self::EndAnchor | Self::Capture { .. } | Self::CaptureAlternation => "",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::EndAnchor => "$",
            Self::RootAlternation => "))",
            Self::Capture { .. } | Self::Alternation | Self::CaptureAlternation => ")",
        }
    }
}

/// Joint appended to the body when a new alternative starts.
const ALTERNATION_JOINT: &str = ")|(?:";

/// Mutable state owned by one builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpressionState {
    start_anchor: bool,
    body: String,
    /// Outermost first.
    pending: Vec<Closer>,
    flags: FlagSet,
}

impl ExpressionState {
    pub(crate) fn new(flags: FlagSet) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    pub(crate) fn prefix(&self) -> String {
        let mut prefix = String::new();
        if self.start_anchor {
            prefix.push('^');
        }
        for closer in &self.pending {
            prefix.push_str(closer.prefix());
        }
        prefix
    }

    pub(crate) fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn suffix(&self) -> String {
        self.pending.iter().rev().map(|closer| closer.suffix()).collect()
    }

    pub(crate) const fn flags(&self) -> FlagSet {
        self.flags
    }

    pub(crate) const fn flags_mut(&mut self) -> &mut FlagSet {
        &mut self.flags
    }

    pub(crate) fn compile(&self) -> CompiledPattern {
        let mut pattern = self.prefix();
        pattern.push_str(&self.body);
        pattern.push_str(&self.suffix());
        CompiledPattern::new(pattern, self.flags)
    }

    pub(crate) fn push_str(&mut self, fragment: &str) {
        self.body.push_str(fragment);
    }

    pub(crate) const fn set_start_anchor(&mut self, enable: bool) {
        self.start_anchor = enable;
    }

    pub(crate) fn set_end_anchor(&mut self, enable: bool) {
        let present = matches!(self.pending.first(), Some(Closer::EndAnchor));
        if enable && !present {
            self.pending.insert(0, Closer::EndAnchor);
        } else if !enable && present {
            self.pending.remove(0);
        }
    }

    pub(crate) fn open_capture(&mut self) {
        self.pending.push(Closer::Capture {
            open_at: self.body.len(),
        });
        self.body.push('(');
    }

    /// Close the innermost open capture and any alternation scoped inside it.
    ///
    /// Returns `false` when no capture is open.
    pub(crate) fn close_capture(&mut self) -> bool {
        let Some(index) = self
            .pending
            .iter()
            .rposition(|closer| matches!(closer, Closer::Capture { .. }))
        else {
            return false;
        };
        for closer in self.pending.drain(index..).rev() {
            self.body.push_str(closer.suffix());
        }
        true
    }

    /// Start a new alternative.
    ///
    /// Inside an open capture the alternation covers the capture's contents;
    /// otherwise it covers the whole body. Returns `false`, leaving the state
    /// untouched, when there is nothing yet to alternate with.
    pub(crate) fn open_alternation(&mut self) -> bool {
        let innermost_capture = self.pending.iter().rev().find_map(|closer| match closer {
            Closer::Capture { open_at } => Some(*open_at),
            _ => None,
        });
        if let Some(open_at) = innermost_capture {
            let scope_start = open_at + 1;
            if self.body.len() <= scope_start {
                return false;
            }
            self.body.insert_str(scope_start, "(?:");
            self.pending.push(Closer::CaptureAlternation);
        } else {
            if self.body.is_empty() {
                return false;
            }
            let closer = if self.pending.contains(&Closer::RootAlternation) {
                Closer::Alternation
            } else {
                Closer::RootAlternation
            };
            self.pending.push(closer);
        }
        self.body.push_str(ALTERNATION_JOINT);
        true
    }

    /// Number of captures still waiting for `end_capture`.
    pub(crate) fn open_captures(&self) -> usize {
        self.pending
            .iter()
            .filter(|closer| matches!(closer, Closer::Capture { .. }))
            .count()
    }
}
