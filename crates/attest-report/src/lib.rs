//! Result capture, scoped diagnostics, and the reporter registry.
//!
//! Everything longer-lived than a single assertion lives here: the
//! [`ResultCapture`] interface the evaluator commits records to, the
//! [`ScopedInfoStack`] of contextual messages, the name-keyed
//! [`ReporterRegistry`], the explicitly constructed [`TestContext`] that
//! replaces ambient global state, and the distinguished [`TestFailure`]
//! signal raised for stop-on-failure call sites.

mod capture;
mod context;
mod registry;
mod scoped;
mod signal;

pub use capture::{RecordingCapture, ResultCapture};
pub use context::{ScopedInfo, TestContext};
pub use registry::{Reporter, ReporterConfig, ReporterFactory, ReporterRegistry};
pub use scoped::{InfoToken, ScopedInfoEntry, ScopedInfoStack};
pub use signal::{catch_test_failure, is_test_failure, raise_test_failure, TestFailure};
