//! The result-capture interface the evaluator commits records to.

use attest_core::AssertionResult;

use crate::scoped::{InfoToken, ScopedInfoStack};

/// Receiver for committed assertion results and free-text diagnostics.
///
/// One capture instance is the single logical owner of the result stream for
/// a test run; assertion macros reach it through the
/// [`TestContext`](crate::TestContext).
pub trait ResultCapture {
    /// Receives a fully evaluated, committed result.
    fn accept_expression(&mut self, result: AssertionResult);

    /// Receives a free-text diagnostic not tied to an expression.
    fn accept_message(&mut self, message: &str);

    /// The most recently accepted result, if any.
    fn current_result(&self) -> Option<&AssertionResult>;

    /// Pushes a scoped diagnostic message.
    fn push_scoped_info(&mut self, text: String) -> InfoToken;

    /// Pops a scoped diagnostic message.
    fn pop_scoped_info(&mut self, token: InfoToken);

    /// Active scoped messages, outermost first.
    fn scoped_messages(&self) -> Vec<String>;
}

impl<T: ResultCapture + ?Sized> ResultCapture for Box<T> {
    fn accept_expression(&mut self, result: AssertionResult) {
        (**self).accept_expression(result);
    }

    fn accept_message(&mut self, message: &str) {
        (**self).accept_message(message);
    }

    fn current_result(&self) -> Option<&AssertionResult> {
        (**self).current_result()
    }

    fn push_scoped_info(&mut self, text: String) -> InfoToken {
        (**self).push_scoped_info(text)
    }

    fn pop_scoped_info(&mut self, token: InfoToken) {
        (**self).pop_scoped_info(token);
    }

    fn scoped_messages(&self) -> Vec<String> {
        (**self).scoped_messages()
    }
}

/// In-memory reference capture.
///
/// Records everything it is handed, in order. Free-text messages are also
/// attached to the most recent result so a reporter reading the stream sees
/// the message next to the assertion it belongs to.
#[derive(Debug, Default)]
pub struct RecordingCapture {
    results: Vec<AssertionResult>,
    messages: Vec<String>,
    scoped: ScopedInfoStack,
}

impl RecordingCapture {
    /// Creates an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// All results accepted so far, in acceptance order.
    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    /// All free-text messages accepted so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of accepted results carrying the failure bit.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|result| !result.ok()).count()
    }
}

impl ResultCapture for RecordingCapture {
    fn accept_expression(&mut self, result: AssertionResult) {
        self.results.push(result);
    }

    fn accept_message(&mut self, message: &str) {
        if let Some(last) = self.results.last_mut() {
            last.set_message(message);
        }
        self.messages.push(message.to_string());
    }

    fn current_result(&self) -> Option<&AssertionResult> {
        self.results.last()
    }

    fn push_scoped_info(&mut self, text: String) -> InfoToken {
        self.scoped.push(text)
    }

    fn pop_scoped_info(&mut self, token: InfoToken) {
        self.scoped.pop(token);
    }

    fn scoped_messages(&self) -> Vec<String> {
        self.scoped.current_messages()
    }
}
