use attest_core::{ResultKind, SourceLocation};
use attest_eval::{op, ResultBuilder, ReverseBuilder};
use attest_render::rendered;

fn loc() -> SourceLocation {
    SourceLocation {
        file: "tests/expansion.rs",
        line: 1,
    }
}

#[test]
fn failing_comparison_expands_operand_values() {
    let a = 1;
    let b = 2;
    let mut builder = ResultBuilder::new("check!", loc(), "a == b", false);
    builder
        .seed(&a, rendered!(a))
        .close::<op::Eq, _>(ReverseBuilder::new().seed(&b, rendered!(b)));

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "1 == 2");
    assert_eq!(result.expression(), "a == b");
}

#[test]
fn passing_comparison_commits_ok() {
    let a = 7;
    let b = 7;
    let mut builder = ResultBuilder::new("check!", loc(), "a == b", false);
    builder
        .seed(&a, rendered!(a))
        .close::<op::Eq, _>(ReverseBuilder::new().seed(&b, rendered!(b)));

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expanded_expression(), "7 == 7");
}

#[test]
fn ordering_operators_expand_with_their_symbol() {
    let small = 3.5_f64;
    let large = 9.25_f64;
    let mut builder = ResultBuilder::new("check!", loc(), "small < large", false);
    builder
        .seed(&small, rendered!(small))
        .close::<op::Lt, _>(ReverseBuilder::new().seed(&large, rendered!(large)));

    let result = builder.into_result();
    assert!(result.ok());
    assert_eq!(result.expanded_expression(), "3.5 < 9.25");
}

#[test]
fn text_operands_expand_verbatim() {
    let name = "ada";
    let expected = "grace";
    let mut builder = ResultBuilder::new("check!", loc(), "name == expected", false);
    builder
        .seed(&name, rendered!(name))
        .close::<op::Ne, _>(ReverseBuilder::new().seed(&expected, rendered!(expected)));

    let result = builder.into_result();
    assert!(result.ok());
    assert_eq!(result.expanded_expression(), "ada != grace");
}

#[test]
fn negated_comparison_flips_the_committed_kind() {
    let a = 1;
    let b = 2;
    let mut builder = ResultBuilder::new("check_false!", loc(), "a == b", true);
    builder
        .seed(&a, rendered!(a))
        .close::<op::Eq, _>(ReverseBuilder::new().seed(&b, rendered!(b)));

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expression(), "!(a == b)");
    assert_eq!(result.expanded_expression(), "1 == 2");
}

#[test]
fn plain_boolean_keeps_raw_text() {
    let mut builder = ResultBuilder::new("check!", loc(), "list.is_empty()", false);
    builder.conclude_plain(false);

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "list.is_empty()");
}

#[test]
fn reverse_chain_prepends_toward_the_left() {
    let c = 2;
    let d = 3;
    let partial = ReverseBuilder::new()
        .seed(&d, rendered!(d))
        .extend::<op::Eq, _>(&c, rendered!(c))
        .into_partial();

    let mut builder = ResultBuilder::new("check!", loc(), "flag && c == d", false);
    builder.seed_bool(true).join_and(|| partial, "c == d");

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "true && 2 == 3");
}

#[test]
fn unfinalized_builder_reads_as_failure() {
    let builder = ResultBuilder::new("check!", loc(), "a == b", false);
    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::Unknown);
    assert!(!result.ok());
}
