//! The builder that accumulates one assertion's outcome and expanded text.

use attest_core::{AssertionResult, SourceLocation};
use attest_render::display_string;

use crate::forward::{ForwardChunk, ForwardPartial};

/// Trailing annotation appended when part of a chain could not be expanded.
pub const INCOMPLETE_ANNOTATION: &str =
    " {can't expand the rest of the expression - consider rewriting it}";

/// Accumulates the forward text fragment and the in-flight result record for
/// a single assertion.
///
/// Created once per assertion by the macro layer, advanced through the chain
/// types, and consumed by [`into_result`](Self::into_result) after exactly
/// one terminal call has committed the outcome.
pub struct ResultBuilder {
    result: AssertionResult,
    text: String,
    incomplete: bool,
}

impl ResultBuilder {
    /// Creates a builder around a fresh, unfinalized record.
    pub fn new(
        macro_name: &'static str,
        location: SourceLocation,
        expression: &str,
        is_negated: bool,
    ) -> Self {
        Self {
            result: AssertionResult::new(macro_name, location, expression, is_negated),
            text: String::new(),
            incomplete: false,
        }
    }

    /// Seeds the forward chain with the leftmost operand.
    ///
    /// `shown` is the operand's display form, produced at the call site where
    /// the concrete type is known. The operand itself is only borrowed for
    /// the remainder of the chain.
    pub fn seed<'v, T>(&mut self, operand: &'v T, shown: String) -> ForwardChunk<'_, 'v, T> {
        self.text.push_str(&shown);
        ForwardChunk::new(self, operand)
    }

    /// Seeds the forward chain with an already-folded boolean clause.
    pub fn seed_bool(&mut self, value: bool) -> ForwardPartial<'_> {
        self.text.push_str(&display_string(&value));
        ForwardPartial::new(self, value)
    }

    /// Commits a plain boolean expression with no operator structure.
    ///
    /// No expansion is recorded; the record keeps the raw expression text.
    pub fn conclude_plain(&mut self, outcome: bool) {
        self.result.set_outcome(outcome);
    }

    /// Consumes the builder, yielding the committed record.
    ///
    /// If no terminal call ran, the record still carries
    /// [`ResultKind::Unknown`](attest_core::ResultKind::Unknown), a caller
    /// bug that reads as a failure rather than a pass.
    pub fn into_result(self) -> AssertionResult {
        self.result
    }

    pub(crate) fn push_symbol(&mut self, symbol: &str) {
        self.text.push_str(symbol);
    }

    pub(crate) fn push_operand(&mut self, shown: &str) {
        self.text.push_str(shown);
    }

    pub(crate) fn mark_incomplete(&mut self) {
        self.incomplete = true;
    }

    /// Terminal fold: glues the reverse fragment onto the forward text and
    /// commits the final boolean.
    pub(crate) fn finish(&mut self, outcome: bool, reverse_text: &str) {
        let mut expanded = std::mem::take(&mut self.text);
        expanded.push_str(reverse_text);
        if self.incomplete {
            expanded.push_str(INCOMPLETE_ANNOTATION);
        }
        self.result.set_expanded_expression(expanded);
        self.result.set_outcome(outcome);
    }
}
