//! Assertion macro surface.
//!
//! The public macros delegate to the hidden `__assert!`/`__scan!` pair:
//! `__scan!` classifies the expression by scanning its top-level tokens
//! (delimited groups are opaque) and sequences the evaluator calls in
//! evaluation order; `__assert!` wraps the classified chain with record
//! construction, capture hand-off, and the optional stop-on-failure raise.
//!
//! Supported grammar: a single comparison (`==`, `!=`, `<`, `>`, `<=`, `>=`,
//! with `::<...>` turbofish consumed atomically), a uniform `&&` or `||`
//! chain whose first and last clauses may themselves be comparisons, or any
//! other expression evaluated as one opaque boolean. Operands carrying
//! un-prefixed generic arguments need parentheses. Mixing `&&` and `||` at
//! the same level degrades to the opaque-boolean form.

/// Checks an expression, recording the result and continuing on failure.
///
/// ```
/// use attest::{check, RecordingCapture, TestContext};
///
/// let ctx = TestContext::new(RecordingCapture::new());
/// let answer = 42;
/// check!(ctx, answer == 6 * 7);
/// assert!(ctx.current_ok());
/// ```
#[macro_export]
macro_rules! check {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert!($ctx, "check!", false, false, [$($expr)+])
    };
}

/// Checks an expression, aborting the current test on failure.
///
/// On failure the distinguished [`TestFailure`](crate::TestFailure) signal
/// unwinds to the driver's [`catch_test_failure`](crate::catch_test_failure)
/// boundary.
#[macro_export]
macro_rules! require {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert!($ctx, "require!", false, true, [$($expr)+])
    };
}

/// Checks that an expression is false, continuing on failure.
#[macro_export]
macro_rules! check_false {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert!($ctx, "check_false!", true, false, [$($expr)+])
    };
}

/// Checks that an expression is false, aborting the current test on failure.
#[macro_export]
macro_rules! require_false {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert!($ctx, "require_false!", true, true, [$($expr)+])
    };
}

/// Records an informational message; never fails.
#[macro_export]
macro_rules! info {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__message!($ctx, "info!", Info, false, $($arg)+)
    };
}

/// Records a warning message; never fails.
#[macro_export]
macro_rules! warn {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__message!($ctx, "warn!", Warning, false, $($arg)+)
    };
}

/// Forces a failure with a formatted message and aborts the current test.
///
/// ```
/// use attest::{catch_test_failure, fail, RecordingCapture, TestContext};
///
/// let ctx = TestContext::new(RecordingCapture::new());
/// let aborted = catch_test_failure(|| {
///     fail!(ctx, "unsupported fixture revision {}", 3);
/// });
/// assert!(aborted.is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($ctx:expr, $($arg:tt)+) => {
        $crate::__message!($ctx, "fail!", ExplicitFailure, true, $($arg)+)
    };
}

/// Opens a scoped diagnostic message for the rest of the enclosing block.
///
/// Expands to a `let` binding holding an RAII guard, so it must be used as a
/// statement. The message is popped on every exit path of the scope,
/// including an aborting assertion.
#[macro_export]
macro_rules! scoped_info {
    ($ctx:expr, $($arg:tt)+) => {
        let __attest_scoped_info = $ctx.scoped_info(::std::format!($($arg)+));
    };
}

/// Checks that an expression panics, continuing on failure.
///
/// The stop-on-failure signal of an inner `require!` is not a panic in this
/// sense: it is resumed untouched.
#[macro_export]
macro_rules! check_panics {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert_panics!($ctx, "check_panics!", false, [$($expr)+])
    };
}

/// Checks that an expression panics, aborting the current test on failure.
#[macro_export]
macro_rules! require_panics {
    ($ctx:expr, $($expr:tt)+) => {
        $crate::__assert_panics!($ctx, "require_panics!", true, [$($expr)+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert {
    ($ctx:expr, $name:literal, $negated:tt, $stop:tt, [$($expr:tt)+]) => {{
        let __ctx = &$ctx;
        let mut __builder = $crate::__private::ResultBuilder::new(
            $name,
            $crate::__private::SourceLocation {
                file: ::core::file!(),
                line: ::core::line!(),
            },
            ::core::stringify!($($expr)+),
            $negated,
        );
        $crate::__scan!(@s __builder [$($expr)+] [] [] none ; $($expr)+);
        __ctx.accept_expression(__builder.into_result());
        $crate::__maybe_raise!(__ctx, $stop);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    ($ctx:expr, $name:literal, $kind:ident, $stop:tt, $($arg:tt)+) => {{
        let __ctx = &$ctx;
        let mut __result = $crate::__private::AssertionResult::new(
            $name,
            $crate::__private::SourceLocation {
                file: ::core::file!(),
                line: ::core::line!(),
            },
            "",
            false,
        );
        __result.set_kind($crate::__private::ResultKind::$kind);
        __ctx.accept_expression(__result);
        __ctx.accept_message(&::std::format!($($arg)+));
        $crate::__maybe_raise!(__ctx, $stop);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_panics {
    ($ctx:expr, $name:literal, $stop:tt, [$($expr:tt)+]) => {{
        let __ctx = &$ctx;
        let __outcome = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| {
            let _ = { $($expr)+ };
        }));
        let __panicked = match __outcome {
            ::core::result::Result::Ok(()) => false,
            ::core::result::Result::Err(__payload) => {
                if $crate::__private::is_test_failure(__payload.as_ref()) {
                    ::std::panic::resume_unwind(__payload);
                }
                true
            }
        };
        let mut __result = $crate::__private::AssertionResult::new(
            $name,
            $crate::__private::SourceLocation {
                file: ::core::file!(),
                line: ::core::line!(),
            },
            ::core::stringify!($($expr)+),
            false,
        );
        __result.set_outcome(__panicked);
        __ctx.accept_expression(__result);
        $crate::__maybe_raise!(__ctx, $stop);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __maybe_raise {
    ($ctx:expr, true) => {
        if !$ctx.current_ok() {
            $crate::__private::raise_test_failure();
        }
    };
    ($ctx:expr, false) => {};
}

// Token scanner. The `@s` pass splits the expression at top-level `&&`/`||`
// into clause groups while tracking which connective the chain uses; `@cmp`
// splits one clause at its comparison operator, treating `::<...>` as part of
// the operand; `@turbo` tracks angle-bracket depth inside a turbofish. State
// rides in front of the `;`, unconsumed tokens behind it.
#[doc(hidden)]
#[macro_export]
macro_rules! __scan {
    // -- logical-op discovery --------------------------------------------
    (@s $b:ident $orig:tt [$($done:tt)*] [$($cur:tt)*] none ; && $($rest:tt)*) => {
        $crate::__scan!(@s $b $orig [$($done)* [$($cur)*]] [] and ; $($rest)*)
    };
    (@s $b:ident $orig:tt [$($done:tt)*] [$($cur:tt)*] and ; && $($rest:tt)*) => {
        $crate::__scan!(@s $b $orig [$($done)* [$($cur)*]] [] and ; $($rest)*)
    };
    (@s $b:ident $orig:tt $done:tt $cur:tt or ; && $($rest:tt)*) => {
        $crate::__scan!(@plain $b $orig)
    };
    (@s $b:ident $orig:tt [$($done:tt)*] [$($cur:tt)*] none ; || $($rest:tt)*) => {
        $crate::__scan!(@s $b $orig [$($done)* [$($cur)*]] [] or ; $($rest)*)
    };
    (@s $b:ident $orig:tt [$($done:tt)*] [$($cur:tt)*] or ; || $($rest:tt)*) => {
        $crate::__scan!(@s $b $orig [$($done)* [$($cur)*]] [] or ; $($rest)*)
    };
    (@s $b:ident $orig:tt $done:tt $cur:tt and ; || $($rest:tt)*) => {
        $crate::__scan!(@plain $b $orig)
    };
    (@s $b:ident $orig:tt $done:tt [$($cur:tt)*] $mode:tt ; $t:tt $($rest:tt)*) => {
        $crate::__scan!(@s $b $orig $done [$($cur)* $t] $mode ; $($rest)*)
    };
    // -- end of input: dispatch on what was found ------------------------
    (@s $b:ident $orig:tt [] [$($cur:tt)*] none ;) => {
        $crate::__scan!(@cmp [single $b] [] ; $($cur)*)
    };
    (@s $b:ident $orig:tt [[$($first:tt)*] $($mid:tt)*] [$($last:tt)*] and ;) => {{
        let __partial = $crate::__scan!(@cmp [first $b] [] ; $($first)*);
        $(
            let __partial = $crate::__scan!(@mid_and __partial $mid);
        )*
        $crate::__scan!(@cmp [last_and __partial] [] ; $($last)*);
    }};
    (@s $b:ident $orig:tt [[$($first:tt)*] $($mid:tt)*] [$($last:tt)*] or ;) => {{
        let __partial = $crate::__scan!(@cmp [first $b] [] ; $($first)*);
        $(
            let __partial = $crate::__scan!(@mid_or __partial $mid);
        )*
        $crate::__scan!(@cmp [last_or __partial] [] ; $($last)*);
    }};

    // -- comparison discovery within one clause --------------------------
    (@cmp $k:tt [$($l:tt)*] ; :: < $($rest:tt)*) => {
        $crate::__scan!(@turbo $k [$($l)* :: <] [@] ; $($rest)*)
    };
    (@cmp $k:tt [$($l:tt)*] ; == $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Eq [==] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; != $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Ne [!=] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; <= $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Le [<=] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; >= $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Ge [>=] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; < $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Lt [<] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; > $($rest:tt)*) => {
        $crate::__scan!(@found $k [$($l)*] Gt [>] [$($rest)*])
    };
    (@cmp $k:tt [$($l:tt)*] ; $t:tt $($rest:tt)*) => {
        $crate::__scan!(@cmp $k [$($l)* $t] ; $($rest)*)
    };
    (@cmp $k:tt [$($l:tt)*] ;) => {
        $crate::__scan!(@none $k [$($l)*])
    };

    // -- turbofish: consume until the matching closing bracket -----------
    (@turbo $k:tt [$($l:tt)*] [$($d:tt)*] ; < $($rest:tt)*) => {
        $crate::__scan!(@turbo $k [$($l)* <] [$($d)* @] ; $($rest)*)
    };
    (@turbo $k:tt [$($l:tt)*] [@] ; > $($rest:tt)*) => {
        $crate::__scan!(@cmp $k [$($l)* >] ; $($rest)*)
    };
    (@turbo $k:tt [$($l:tt)*] [@ $($d:tt)+] ; > $($rest:tt)*) => {
        $crate::__scan!(@turbo $k [$($l)* >] [$($d)+] ; $($rest)*)
    };
    (@turbo $k:tt [$($l:tt)*] [@ @] ; >> $($rest:tt)*) => {
        $crate::__scan!(@cmp $k [$($l)* >>] ; $($rest)*)
    };
    (@turbo $k:tt [$($l:tt)*] [@ @ $($d:tt)+] ; >> $($rest:tt)*) => {
        $crate::__scan!(@turbo $k [$($l)* >>] [$($d)+] ; $($rest)*)
    };
    (@turbo $k:tt [$($l:tt)*] $d:tt ; $t:tt $($rest:tt)*) => {
        $crate::__scan!(@turbo $k [$($l)* $t] $d ; $($rest)*)
    };

    // -- a comparison clause ---------------------------------------------
    (@found [single $b:ident] [$($l:tt)*] $op:ident $opt:tt [$($r:tt)*]) => {
        match (&($($l)*), &($($r)*)) {
            (__lhs, __rhs) => {
                $b.seed(__lhs, $crate::rendered!(__lhs))
                    .close::<$crate::__private::op::$op, _>(
                        $crate::__private::ReverseBuilder::new()
                            .seed(__rhs, $crate::rendered!(__rhs)),
                    );
            }
        }
    };
    (@found [first $b:ident] [$($l:tt)*] $op:ident $opt:tt [$($r:tt)*]) => {
        match (&($($l)*), &($($r)*)) {
            (__lhs, __rhs) => $b
                .seed(__lhs, $crate::rendered!(__lhs))
                .compare::<$crate::__private::op::$op, _>(__rhs, $crate::rendered!(__rhs))
                .into_partial(),
        }
    };
    (@found [last_and $p:ident] [$($l:tt)*] $op:ident [$($opt:tt)*] [$($r:tt)*]) => {
        $p.join_and(
            || match (&($($l)*), &($($r)*)) {
                (__lhs, __rhs) => $crate::__private::ReverseBuilder::new()
                    .seed(__rhs, $crate::rendered!(__rhs))
                    .extend::<$crate::__private::op::$op, _>(__lhs, $crate::rendered!(__lhs))
                    .into_partial(),
            },
            ::core::stringify!($($l)* $($opt)* $($r)*),
        )
    };
    (@found [last_or $p:ident] [$($l:tt)*] $op:ident [$($opt:tt)*] [$($r:tt)*]) => {
        $p.join_or(
            || match (&($($l)*), &($($r)*)) {
                (__lhs, __rhs) => $crate::__private::ReverseBuilder::new()
                    .seed(__rhs, $crate::rendered!(__rhs))
                    .extend::<$crate::__private::op::$op, _>(__lhs, $crate::rendered!(__lhs))
                    .into_partial(),
            },
            ::core::stringify!($($l)* $($opt)* $($r)*),
        )
    };

    // -- a clause with no comparison -------------------------------------
    (@none [single $b:ident] [$($c:tt)*]) => {{
        let __value: bool = $($c)*;
        $b.conclude_plain(__value);
    }};
    (@none [first $b:ident] [$($c:tt)*]) => {
        $b.seed_bool({ $($c)* })
    };
    (@none [last_and $p:ident] [$($c:tt)*]) => {
        $p.join_and(
            || $crate::__private::ReversePartial::from_bool({ $($c)* }),
            ::core::stringify!($($c)*),
        )
    };
    (@none [last_or $p:ident] [$($c:tt)*]) => {
        $p.join_or(
            || $crate::__private::ReversePartial::from_bool({ $($c)* }),
            ::core::stringify!($($c)*),
        )
    };

    // -- opaque middle clauses -------------------------------------------
    (@mid_and $p:ident [$($c:tt)*]) => {
        $p.and_then(|| { $($c)* }, ::core::stringify!($($c)*))
    };
    (@mid_or $p:ident [$($c:tt)*]) => {
        $p.or_else(|| { $($c)* }, ::core::stringify!($($c)*))
    };

    // -- mixed connectives: evaluate natively, keep the raw text ---------
    (@plain $b:ident [$($orig:tt)*]) => {{
        let __value: bool = $($orig)*;
        $b.conclude_plain(__value);
    }};
}
