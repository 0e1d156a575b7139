#![deny(missing_docs)]

//! Core result types for the attest assertion engine.
//!
//! This crate holds the data model shared by the evaluator, the reporting
//! interfaces, and the user-facing macros: the [`ResultKind`] classification,
//! the [`AssertionResult`] record handed to result-capture collaborators, and
//! the structured [`AttestError`] surface.

pub mod errors;
mod kind;
mod result;

pub use errors::{AttestError, ErrorInfo};
pub use kind::ResultKind;
pub use result::{AssertionResult, SourceLocation};
