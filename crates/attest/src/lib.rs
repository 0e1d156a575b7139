//! Expression-expanding assertion macros with pluggable result capture.
//!
//! An assertion evaluates its expression exactly once, decides pass/fail, and
//! records a human-readable expansion of the expression with the actual
//! runtime operand values substituted in:
//!
//! ```
//! use attest::{check, RecordingCapture, TestContext};
//!
//! let ctx = TestContext::new(RecordingCapture::new());
//! let expected = 3;
//! let actual = 4;
//! check!(ctx, expected == actual);
//!
//! let capture = ctx.into_capture();
//! assert_eq!(capture.results()[0].expanded_expression(), "3 == 4");
//! ```
//!
//! Every committed result flows to the [`ResultCapture`] owned by the
//! [`TestContext`]; `require!`-family macros additionally raise the
//! distinguished [`TestFailure`] signal when the result failed, aborting the
//! current test at the driver's [`catch_test_failure`] boundary. The
//! `check!` family records the failure and lets the test continue.

mod macros;

pub use attest_core::{AssertionResult, AttestError, ErrorInfo, ResultKind, SourceLocation};
pub use attest_eval::{
    op, Approx, ForwardChunk, ForwardPartial, ResultBuilder, ReverseBuilder, ReverseChunk,
    ReversePartial, INCOMPLETE_ANNOTATION,
};
pub use attest_render::{display_string, rendered, Render, RenderDisplay, RenderFallback, UNPRINTABLE};
pub use attest_report::{
    catch_test_failure, raise_test_failure, InfoToken, RecordingCapture, Reporter, ReporterConfig,
    ReporterFactory, ReporterRegistry, ResultCapture, ScopedInfo, ScopedInfoEntry,
    ScopedInfoStack, TestContext, TestFailure,
};

#[doc(hidden)]
pub mod __private {
    pub use attest_core::{AssertionResult, ResultKind, SourceLocation};
    pub use attest_eval::{op, ResultBuilder, ReverseBuilder, ReversePartial};
    pub use attest_report::{is_test_failure, raise_test_failure};
}
