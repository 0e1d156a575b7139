//! Scoped diagnostic messages, kept in strict LIFO order.

use serde::{Deserialize, Serialize};

/// A single contextual message tied to a lexical scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedInfoEntry {
    /// The message text.
    pub text: String,
}

/// Handle returned by [`ScopedInfoStack::push`], required to pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoToken(usize);

/// Stack of contextual messages active for the current test.
///
/// Entries are pushed on scope entry and popped on scope exit; pops must
/// nest. Popping a token also removes anything still stacked above it, so a
/// leaked inner guard cannot leave the stack inconsistent.
#[derive(Debug, Default)]
pub struct ScopedInfoStack {
    entries: Vec<ScopedInfoEntry>,
}

impl ScopedInfoStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a message, returning the token its owner must pop with.
    pub fn push(&mut self, text: impl Into<String>) -> InfoToken {
        let token = InfoToken(self.entries.len());
        self.entries.push(ScopedInfoEntry { text: text.into() });
        token
    }

    /// Pops the entry identified by `token`.
    pub fn pop(&mut self, token: InfoToken) {
        debug_assert_eq!(
            token.0 + 1,
            self.entries.len(),
            "scoped info pops must nest"
        );
        self.entries.truncate(token.0);
    }

    /// Active messages, outermost first.
    pub fn current_messages(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.text.clone()).collect()
    }

    /// Number of active entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
