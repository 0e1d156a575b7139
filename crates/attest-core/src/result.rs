//! The assertion result record handed to result-capture collaborators.

use std::fmt;

use serde::Serialize;

use crate::kind::ResultKind;

/// Source position of the assertion macro invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// File the assertion appears in, as produced by `file!()`.
    pub file: &'static str,
    /// Line the assertion appears on.
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Outcome record for a single assertion.
///
/// A record is created when the assertion macro expands, mutated once by the
/// expression evaluator (expanded text) and once by the commit step (final
/// kind), then moved to the result-capture collaborator and never mutated
/// again. Serializes for reporters; it does not deserialize because the
/// macro-name and file fields borrow `'static` source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionResult {
    macro_name: &'static str,
    location: SourceLocation,
    expression: String,
    is_negated: bool,
    kind: ResultKind,
    message: String,
    expanded: String,
}

impl AssertionResult {
    /// Creates a fresh record in the [`ResultKind::Unknown`] state.
    ///
    /// When `is_negated` is set, the stored expression text becomes
    /// `!(expression)` and the final [`set_kind`](Self::set_kind) call flips
    /// `Ok` and `ExpressionFailed`.
    pub fn new(
        macro_name: &'static str,
        location: SourceLocation,
        expression: &str,
        is_negated: bool,
    ) -> Self {
        let expression = if is_negated {
            format!("!({expression})")
        } else {
            expression.to_string()
        };
        Self {
            macro_name,
            location,
            expression,
            is_negated,
            kind: ResultKind::Unknown,
            message: String::new(),
            expanded: String::new(),
        }
    }

    /// Returns true when the result does not carry the failure bit.
    pub fn ok(&self) -> bool {
        !self.kind.is_failure()
    }

    /// Returns the result classification.
    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    /// Name of the macro that produced this record (e.g. `"check!"`).
    pub fn macro_name(&self) -> &'static str {
        self.macro_name
    }

    /// Source position of the assertion.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The expression as written at the call site.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Whether the assertion was a negated form.
    pub fn is_negated(&self) -> bool {
        self.is_negated
    }

    /// Returns true when the record describes an expression (message-only
    /// records do not).
    pub fn has_expression(&self) -> bool {
        !self.expression.is_empty()
    }

    /// Returns true when a free-text message was attached.
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    /// The attached free-text message, empty if none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The expanded expression with runtime operand values substituted in.
    ///
    /// Falls back to the raw expression text when no expansion was recorded,
    /// which keeps plain boolean assertions readable.
    pub fn expanded_expression(&self) -> &str {
        if self.expanded.is_empty() {
            &self.expression
        } else {
            &self.expanded
        }
    }

    /// Attaches a free-text message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Records the expanded expression text assembled by the evaluator.
    pub fn set_expanded_expression(&mut self, expanded: String) {
        self.expanded = expanded;
    }

    /// Finalizes the result classification, applying negation inversion.
    ///
    /// Negation flips `Ok` and `ExpressionFailed` exactly once; every other
    /// kind passes through unchanged. The record does not defend against a
    /// second invocation; the evaluator guarantees the commit step runs
    /// once.
    pub fn set_kind(&mut self, kind: ResultKind) {
        self.kind = match (self.is_negated, kind) {
            (true, ResultKind::Ok) => ResultKind::ExpressionFailed,
            (true, ResultKind::ExpressionFailed) => ResultKind::Ok,
            (_, other) => other,
        };
    }

    /// Commits a raw boolean outcome as `Ok` or `ExpressionFailed`.
    pub fn set_outcome(&mut self, outcome: bool) {
        self.set_kind(if outcome {
            ResultKind::Ok
        } else {
            ResultKind::ExpressionFailed
        });
    }
}
