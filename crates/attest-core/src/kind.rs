//! Result classification with an explicit failure bit.

use serde::{Deserialize, Serialize};

/// Discriminant bit set on every kind that counts as a failure.
const FAILURE_BIT: u8 = 0x10;

/// Classification of a single assertion result.
///
/// The discriminant layout reserves [`FAILURE_BIT`] for everything that must
/// count as a failure, so [`ResultKind::is_failure`] stays a bit test and a
/// new failure sub-kind is counted correctly without touching any pass/fail
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResultKind {
    /// The assertion evaluated to true.
    Ok = 0x00,
    /// Reporting-only informational message; not a failure.
    Info = 0x01,
    /// Reporting-only warning message; not a failure.
    Warning = 0x02,
    /// The assertion expression evaluated to false.
    ExpressionFailed = FAILURE_BIT,
    /// The test author forced a failure.
    ExplicitFailure = FAILURE_BIT | 0x01,
    /// The result was never finalized.
    ///
    /// Observing this kind outside the evaluator is a caller bug; it carries
    /// the failure bit so an unfinalized record can never read as a pass.
    Unknown = FAILURE_BIT | 0x0f,
}

impl ResultKind {
    /// Returns true when this kind counts as a failure.
    pub fn is_failure(self) -> bool {
        (self as u8) & FAILURE_BIT != 0
    }
}

impl Default for ResultKind {
    fn default() -> Self {
        ResultKind::Unknown
    }
}
