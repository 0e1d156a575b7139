//! Reverse (right-to-left) chain evaluation.
//!
//! Used when capture must proceed from the rightmost operand inward: the
//! reverse side assembles its text fragment by prepending and owns all of its
//! state outright, handing the finished fragment to the terminal fold.

use attest_render::display_string;

use crate::op::Comparator;

/// Accumulates the reverse text fragment.
#[derive(Default)]
pub struct ReverseBuilder {
    text: String,
}

impl ReverseBuilder {
    /// Creates an empty reverse fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the reverse chain with the rightmost operand.
    pub fn seed<'v, T>(mut self, operand: &'v T, shown: String) -> ReverseChunk<'v, T> {
        self.prepend(&shown);
        ReverseChunk {
            builder: self,
            operand,
            acc: true,
        }
    }

    fn prepend(&mut self, chunk: &str) {
        self.text.insert_str(0, chunk);
    }
}

/// A captured operand on the reverse chain.
pub struct ReverseChunk<'v, T> {
    builder: ReverseBuilder,
    operand: &'v T,
    acc: bool,
}

impl<'v, T> ReverseChunk<'v, T> {
    /// Extends the chain one operand to the left.
    ///
    /// The comparison computes eagerly; the operator symbol and the left
    /// operand's display form are prepended to the fragment.
    pub fn extend<C, L>(self, lhs: &'v L, shown: String) -> ReverseChunk<'v, L>
    where
        C: Comparator<L, T>,
    {
        let mut builder = self.builder;
        builder.prepend(C::SYMBOL);
        builder.prepend(&shown);
        let acc = C::compare(lhs, self.operand) && self.acc;
        ReverseChunk {
            builder,
            operand: lhs,
            acc,
        }
    }

    /// Drops the operand borrow, keeping the fragment and folded boolean.
    pub fn into_partial(self) -> ReversePartial {
        ReversePartial {
            text: self.builder.text,
            acc: self.acc,
        }
    }

    pub(crate) fn into_parts(self) -> (String, &'v T, bool) {
        (self.builder.text, self.operand, self.acc)
    }
}

/// The completed reverse half of a chain: owned text plus partial boolean.
pub struct ReversePartial {
    text: String,
    acc: bool,
}

impl ReversePartial {
    /// Wraps an opaque boolean clause as a reverse half.
    pub fn from_bool(value: bool) -> Self {
        Self {
            text: display_string(&value),
            acc: value,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn acc(&self) -> bool {
        self.acc
    }
}
