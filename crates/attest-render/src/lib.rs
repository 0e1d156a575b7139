#![deny(missing_docs)]

//! Capability-probed value stringification for assertion expansion.
//!
//! Operand types reaching an assertion are arbitrary: some render through
//! [`core::fmt::Display`], some have no textual form at all. The evaluator
//! must never fail over this, so [`rendered!`] probes the capability at the
//! macro expansion site, where the concrete type is known, and degrades to
//! the [`UNPRINTABLE`] placeholder when no conversion exists. The probe is an
//! autoref dispatch resolved entirely during method selection at compile
//! time: [`RenderDisplay`] is implemented for `Render<T>` when `T` is
//! displayable and wins at the shallower reference level, while
//! [`RenderFallback`] on `&Render<T>` catches everything else.
//!
//! Text operands pass through unchanged and numeric operands use Rust's
//! locale-independent shortest-round-trip formatting, both simply by virtue
//! of their `Display` implementations.

use std::fmt::Display;

/// Placeholder returned for operands with no textual conversion.
pub const UNPRINTABLE: &str = "{?}";

/// Probe wrapper around a borrowed operand.
///
/// Construct through [`rendered!`] rather than directly; the macro brings
/// both probe traits into scope and calls through a reference so that method
/// selection can degrade.
pub struct Render<'a, T: ?Sized>(
    /// The borrowed operand under probe.
    pub &'a T,
);

/// Rendering for operands with a `Display` implementation.
pub trait RenderDisplay {
    /// Renders the operand through its `Display` implementation.
    fn render(&self) -> String;
}

impl<'a, T: Display + ?Sized> RenderDisplay for Render<'a, T> {
    fn render(&self) -> String {
        self.0.to_string()
    }
}

/// Fallback rendering for operands without a `Display` implementation.
pub trait RenderFallback {
    /// Returns the [`UNPRINTABLE`] placeholder.
    fn render(&self) -> String;
}

impl<'a, 'b, T: ?Sized> RenderFallback for &'b Render<'a, T> {
    fn render(&self) -> String {
        UNPRINTABLE.to_string()
    }
}

/// Renders a value known to be displayable.
///
/// Used by the evaluator for values it produces itself (folded booleans);
/// operands of unknown type go through [`rendered!`] instead.
pub fn display_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Stringifies any value, degrading to [`UNPRINTABLE`].
///
/// Expands to a compile-time capability probe: no runtime type inspection
/// takes place and the conversion is chosen during method selection. Pure;
/// the value is only borrowed.
#[macro_export]
macro_rules! rendered {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::{RenderDisplay as _, RenderFallback as _};
        (&$crate::Render(&$value)).render()
    }};
}
