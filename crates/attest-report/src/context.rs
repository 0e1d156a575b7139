//! The explicitly constructed execution context.

use std::cell::RefCell;

use attest_core::{AssertionResult, AttestError};

use crate::capture::ResultCapture;
use crate::registry::{Reporter, ReporterConfig, ReporterFactory, ReporterRegistry};
use crate::scoped::InfoToken;

/// Owner of the per-run collaborators: the result capture and the reporter
/// registry.
///
/// Lifecycle is caller-controlled and enforced by the borrow checker:
/// construct with [`new`](Self::new) and register reporters through
/// `&mut self` before the first assertion runs; assertion-time methods take
/// `&self` (the capture sits behind a `RefCell`; execution is
/// single-threaded and every borrow is released before control returns to
/// user code); tear down with [`into_capture`](Self::into_capture) after the
/// last assertion to inspect the stream.
pub struct TestContext<C: ResultCapture> {
    capture: RefCell<C>,
    reporters: ReporterRegistry,
}

impl<C: ResultCapture> TestContext<C> {
    /// Creates a context around the given capture.
    pub fn new(capture: C) -> Self {
        Self {
            capture: RefCell::new(capture),
            reporters: ReporterRegistry::new(),
        }
    }

    /// Registers a reporter factory. Initialization phase only.
    pub fn register_reporter(&mut self, name: impl Into<String>, factory: ReporterFactory) {
        self.reporters.register(name, factory);
    }

    /// Creates a reporter by name, or an explicit not-found error.
    pub fn create_reporter(
        &self,
        name: &str,
        config: &ReporterConfig,
    ) -> Result<Box<dyn Reporter>, AttestError> {
        self.reporters.create(name, config)
    }

    /// Names of the registered reporter factories.
    pub fn reporter_names(&self) -> Vec<&str> {
        self.reporters.factory_names()
    }

    /// Hands a committed result to the capture.
    pub fn accept_expression(&self, result: AssertionResult) {
        self.capture.borrow_mut().accept_expression(result);
    }

    /// Hands a free-text diagnostic to the capture.
    pub fn accept_message(&self, message: &str) {
        self.capture.borrow_mut().accept_message(message);
    }

    /// Whether the most recently accepted result passed.
    ///
    /// True when nothing has been accepted yet.
    pub fn current_ok(&self) -> bool {
        self.capture
            .borrow()
            .current_result()
            .map(AssertionResult::ok)
            .unwrap_or(true)
    }

    /// A copy of the most recently accepted result.
    pub fn current_result(&self) -> Option<AssertionResult> {
        self.capture.borrow().current_result().cloned()
    }

    /// Opens a scoped diagnostic message tied to the returned guard.
    pub fn scoped_info(&self, text: impl Into<String>) -> ScopedInfo<'_, C> {
        let token = self.capture.borrow_mut().push_scoped_info(text.into());
        ScopedInfo { context: self, token }
    }

    /// Active scoped messages, outermost first.
    pub fn scoped_messages(&self) -> Vec<String> {
        self.capture.borrow().scoped_messages()
    }

    /// Tears the context down, yielding the capture for inspection.
    pub fn into_capture(self) -> C {
        self.capture.into_inner()
    }
}

/// RAII guard for one scoped diagnostic message.
///
/// Pops its entry when dropped, so the pop happens on every exit path of the
/// owning scope, normal return and panic unwinding alike.
pub struct ScopedInfo<'ctx, C: ResultCapture> {
    context: &'ctx TestContext<C>,
    token: InfoToken,
}

impl<C: ResultCapture> Drop for ScopedInfo<'_, C> {
    fn drop(&mut self) {
        self.context
            .capture
            .borrow_mut()
            .pop_scoped_info(self.token);
    }
}
