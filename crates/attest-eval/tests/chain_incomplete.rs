use std::cell::Cell;

use attest_core::{ResultKind, SourceLocation};
use attest_eval::{op, ResultBuilder, ReverseBuilder, ReversePartial, INCOMPLETE_ANNOTATION};
use attest_render::rendered;

fn loc() -> SourceLocation {
    SourceLocation {
        file: "tests/chain_incomplete.rs",
        line: 1,
    }
}

#[test]
fn three_clause_chain_carries_the_annotation() {
    // true && false && true
    let mut builder = ResultBuilder::new("check!", loc(), "true && false && true", false);
    builder
        .seed_bool(true)
        .and_then(|| false, "false")
        .join_and(|| ReversePartial::from_bool(true), "true");

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(
        result.expanded_expression(),
        format!("true && false && true{INCOMPLETE_ANNOTATION}")
    );
}

#[test]
fn two_clause_chain_expands_both_comparisons() {
    let (a, b, c, d) = (1, 1, 2, 3);
    let mut builder = ResultBuilder::new("check!", loc(), "a == b && c == d", false);
    builder
        .seed(&a, rendered!(a))
        .compare::<op::Eq, _>(&b, rendered!(b))
        .into_partial()
        .join_and(
            || {
                ReverseBuilder::new()
                    .seed(&d, rendered!(d))
                    .extend::<op::Eq, _>(&c, rendered!(c))
                    .into_partial()
            },
            "c == d",
        );

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "1 == 1 && 2 == 3");
}

#[test]
fn short_circuited_tail_is_never_evaluated() {
    let ran = Cell::new(false);
    let lhs = 1;
    let rhs = 2;
    let mut builder = ResultBuilder::new("check!", loc(), "lhs == rhs && tail()", false);
    builder
        .seed(&lhs, rendered!(lhs))
        .compare::<op::Eq, _>(&rhs, rendered!(rhs))
        .into_partial()
        .join_and(
            || {
                ran.set(true);
                ReversePartial::from_bool(true)
            },
            "tail()",
        );

    let result = builder.into_result();
    assert!(!ran.get());
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(
        result.expanded_expression(),
        format!("1 == 2 && tail(){INCOMPLETE_ANNOTATION}")
    );
}

#[test]
fn or_chain_short_circuits_on_true() {
    let ran = Cell::new(false);
    let mut builder = ResultBuilder::new("check!", loc(), "ready || fallback()", false);
    builder.seed_bool(true).join_or(
        || {
            ran.set(true);
            ReversePartial::from_bool(false)
        },
        "fallback()",
    );

    let result = builder.into_result();
    assert!(!ran.get());
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(
        result.expanded_expression(),
        format!("true || fallback(){INCOMPLETE_ANNOTATION}")
    );
}

#[test]
fn or_chain_evaluates_tail_when_needed() {
    let x = 5;
    let mut builder = ResultBuilder::new("check!", loc(), "ready || x == 5", false);
    builder.seed_bool(false).join_or(
        || {
            ReverseBuilder::new()
                .seed(&5, rendered!(5))
                .extend::<op::Eq, _>(&x, rendered!(x))
                .into_partial()
        },
        "x == 5",
    );

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expanded_expression(), "false || 5 == 5");
}

#[test]
fn middle_clauses_fold_with_short_circuit() {
    let second = Cell::new(0);
    let third = Cell::new(0);
    let mut builder = ResultBuilder::new("check!", loc(), "a || b || c", false);
    builder
        .seed_bool(false)
        .or_else(
            || {
                second.set(second.get() + 1);
                true
            },
            "b",
        )
        .join_or(
            || {
                third.set(third.get() + 1);
                ReversePartial::from_bool(false)
            },
            "c",
        );

    let result = builder.into_result();
    assert_eq!(second.get(), 1);
    assert_eq!(third.get(), 0);
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(
        result.expanded_expression(),
        format!("false || true || c{INCOMPLETE_ANNOTATION}")
    );
}
