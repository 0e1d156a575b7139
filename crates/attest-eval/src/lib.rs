#![deny(missing_docs)]

//! Bidirectional expression evaluation for assertion expansion.
//!
//! An assertion macro can see the text of the expression it wraps, but it
//! only ever observes operand values one at a time, in evaluation order. This
//! crate turns that stream of observations into two things at once: the final
//! boolean outcome and a printable reconstruction of the expression with the
//! actual runtime values substituted in.
//!
//! The evaluator is an explicit state machine advanced by the macro layer:
//!
//! - a **forward chain** is seeded with the leftmost operand and walks right,
//!   appending stringified operands and operator symbols while folding the
//!   running boolean ([`ResultBuilder::seed`], [`ForwardChunk`],
//!   [`ForwardPartial`]);
//! - a **reverse chain** is seeded with the rightmost operand and walks left,
//!   prepending text ([`ReverseBuilder`], [`ReverseChunk`]);
//! - a **terminal fold** joins the two halves into the committed
//!   [`AssertionResult`](attest_core::AssertionResult).
//!
//! Relational steps compute eagerly (both operands are in hand); logical
//! steps short-circuit exactly as ordinary evaluation would, so a clause on
//! the skipped side of `&&`/`||` is never run. Operands are held by borrow
//! for the duration of one assertion statement and never copied or retained.
//!
//! Clauses past the first comparison of a logical chain cannot be decomposed
//! into operand values; the builder flags this once and the expanded text
//! carries the [`INCOMPLETE_ANNOTATION`] instead of silently dropping
//! information.

mod approx;
mod builder;
mod forward;
pub mod op;
mod reverse;

pub use approx::Approx;
pub use builder::{ResultBuilder, INCOMPLETE_ANNOTATION};
pub use forward::{ForwardChunk, ForwardPartial};
pub use reverse::{ReverseBuilder, ReverseChunk, ReversePartial};
