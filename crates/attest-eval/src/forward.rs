//! Forward (left-to-right) chain evaluation.

use attest_render::display_string;

use crate::builder::ResultBuilder;
use crate::op::Comparator;
use crate::reverse::{ReverseChunk, ReversePartial};

/// A captured operand on the forward chain.
///
/// Holds the operand by borrow together with the boolean folded so far.
/// Consumed by the next chain step; never escapes the assertion statement.
pub struct ForwardChunk<'b, 'v, T> {
    builder: &'b mut ResultBuilder,
    operand: &'v T,
    acc: bool,
}

impl<'b, 'v, T> ForwardChunk<'b, 'v, T> {
    pub(crate) fn new(builder: &'b mut ResultBuilder, operand: &'v T) -> Self {
        Self {
            builder,
            operand,
            acc: true,
        }
    }

    /// Eagerly compares the captured operand against the next one.
    ///
    /// Both operands are in hand, so the comparison computes immediately; the
    /// operator symbol and the right operand's display form are appended to
    /// the running text and the chain continues from the right operand.
    pub fn compare<C, R>(self, rhs: &'v R, shown: String) -> ForwardChunk<'b, 'v, R>
    where
        C: Comparator<T, R>,
    {
        self.builder.push_symbol(C::SYMBOL);
        self.builder.push_operand(&shown);
        let acc = self.acc && C::compare(self.operand, rhs);
        ForwardChunk {
            builder: self.builder,
            operand: rhs,
            acc,
        }
    }

    /// Terminal fold against a reverse chunk: the two halves of a single
    /// comparison converge here.
    pub fn close<C, R>(self, rev: ReverseChunk<'_, R>)
    where
        C: Comparator<T, R>,
    {
        let (rev_text, rev_operand, rev_acc) = rev.into_parts();
        self.builder.push_symbol(C::SYMBOL);
        let outcome = self.acc && C::compare(self.operand, rev_operand) && rev_acc;
        self.builder.finish(outcome, &rev_text);
    }

    /// Drops the operand borrow, keeping only the folded boolean.
    pub fn into_partial(self) -> ForwardPartial<'b> {
        ForwardPartial::new(self.builder, self.acc)
    }
}

/// The forward half of a logical chain after its first clause completed.
///
/// From this point on, clauses are opaque booleans: their internal structure
/// was folded before the chain could observe it, which the builder records as
/// an incomplete expansion.
pub struct ForwardPartial<'b> {
    builder: &'b mut ResultBuilder,
    acc: bool,
}

impl<'b> ForwardPartial<'b> {
    pub(crate) fn new(builder: &'b mut ResultBuilder, acc: bool) -> Self {
        Self { builder, acc }
    }

    /// Folds `&&` with the next opaque clause.
    ///
    /// The clause runs only when the running boolean is still true, exactly
    /// as ordinary evaluation would; a skipped clause contributes its source
    /// text instead of a value.
    pub fn and_then(self, clause: impl FnOnce() -> bool, source: &str) -> ForwardPartial<'b> {
        self.builder.mark_incomplete();
        self.builder.push_symbol(" && ");
        if self.acc {
            let value = clause();
            self.builder.push_operand(&display_string(&value));
            ForwardPartial {
                builder: self.builder,
                acc: value,
            }
        } else {
            self.builder.push_operand(source);
            self
        }
    }

    /// Folds `||` with the next opaque clause; short-circuits when the
    /// running boolean is already true.
    pub fn or_else(self, clause: impl FnOnce() -> bool, source: &str) -> ForwardPartial<'b> {
        self.builder.mark_incomplete();
        self.builder.push_symbol(" || ");
        if self.acc {
            self.builder.push_operand(source);
            self
        } else {
            let value = clause();
            self.builder.push_operand(&display_string(&value));
            ForwardPartial {
                builder: self.builder,
                acc: value,
            }
        }
    }

    /// Terminal `&&` fold against the reverse half of the chain.
    ///
    /// `tail` evaluates the final clause and is only run when the running
    /// boolean permits it; a skipped tail leaves its source text behind and
    /// marks the chain incomplete.
    pub fn join_and(self, tail: impl FnOnce() -> ReversePartial, source: &str) {
        self.builder.push_symbol(" && ");
        if self.acc {
            let rev = tail();
            self.builder.finish(self.acc && rev.acc(), rev.text());
        } else {
            self.builder.mark_incomplete();
            self.builder.push_operand(source);
            self.builder.finish(false, "");
        }
    }

    /// Terminal `||` fold against the reverse half of the chain.
    pub fn join_or(self, tail: impl FnOnce() -> ReversePartial, source: &str) {
        self.builder.push_symbol(" || ");
        if self.acc {
            self.builder.mark_incomplete();
            self.builder.push_operand(source);
            self.builder.finish(true, "");
        } else {
            let rev = tail();
            self.builder.finish(self.acc || rev.acc(), rev.text());
        }
    }

    /// Terminal fold with an empty reverse half.
    pub fn conclude(self) {
        let acc = self.acc;
        self.builder.finish(acc, "");
    }
}
