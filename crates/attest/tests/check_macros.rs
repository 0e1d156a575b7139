use attest::{check, Approx, RecordingCapture, ResultKind, TestContext, INCOMPLETE_ANNOTATION};

fn ctx() -> TestContext<RecordingCapture> {
    TestContext::new(RecordingCapture::new())
}

#[test]
fn failing_comparison_expands_operand_values() {
    let ctx = ctx();
    let a = 1;
    let b = 2;
    check!(ctx, a == b);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expression(), "a == b");
    assert_eq!(result.expanded_expression(), "1 == 2");
    assert_eq!(result.macro_name(), "check!");
}

#[test]
fn passing_comparison_is_recorded_as_ok() {
    let ctx = ctx();
    let total = 6 * 7;
    check!(ctx, total == 42);
    assert!(ctx.current_ok());

    let capture = ctx.into_capture();
    assert_eq!(capture.results()[0].expanded_expression(), "42 == 42");
}

#[test]
fn ordering_comparisons_expand() {
    let ctx = ctx();
    let low = 1.5_f64;
    let high = 0.5_f64;
    check!(ctx, low < high);

    let capture = ctx.into_capture();
    assert_eq!(capture.results()[0].expanded_expression(), "1.5 < 0.5");
    assert!(!capture.results()[0].ok());
}

#[test]
fn string_operands_expand_verbatim() {
    let ctx = ctx();
    let name = "ada";
    check!(ctx, name == "bob");

    let capture = ctx.into_capture();
    assert_eq!(capture.results()[0].expanded_expression(), "ada == bob");
}

#[test]
fn plain_boolean_keeps_the_raw_expression() {
    let ctx = ctx();
    let values: Vec<u32> = vec![1];
    check!(ctx, values.is_empty());

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), result.expression());
    assert_eq!(result.expression(), stringify!(values.is_empty()));
}

#[test]
fn logical_chain_reports_the_unexpandable_tail() {
    let ctx = ctx();
    check!(ctx, true && false && true);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(
        result.expanded_expression(),
        format!("true && false && true{INCOMPLETE_ANNOTATION}")
    );
}

#[test]
fn two_clause_chain_expands_both_comparisons() {
    let ctx = ctx();
    let (a, b, c, d) = (1, 1, 2, 3);
    check!(ctx, a == b && c == d);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "1 == 1 && 2 == 3");
}

#[test]
fn or_chain_expands_both_comparisons() {
    let ctx = ctx();
    let x = 2;
    check!(ctx, x == 1 || x == 2);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expanded_expression(), "2 == 1 || 2 == 2");
}

#[test]
fn mixed_connectives_degrade_to_the_raw_expression() {
    let ctx = ctx();
    let (a, b, c) = (false, true, true);
    check!(ctx, a || b && c);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expanded_expression(), "a || b && c");
}

#[test]
fn turbofish_operands_survive_the_scan() {
    let ctx = ctx();
    check!(ctx, std::mem::size_of::<u32>() == 4);

    let capture = ctx.into_capture();
    let result = &capture.results()[0];
    assert_eq!(result.kind(), ResultKind::Ok);
    assert_eq!(result.expanded_expression(), "4 == 4");
}

#[test]
fn approx_reads_naturally_on_either_side() {
    let ctx = ctx();
    let measured = 1.0 + 5e-11;
    check!(ctx, measured == Approx::new(1.0));
    check!(ctx, Approx::new(1.0) == measured);
    check!(ctx, measured == Approx::new(2.0));

    let capture = ctx.into_capture();
    assert!(capture.results()[0].ok());
    assert!(capture.results()[1].ok());
    let miss = &capture.results()[2];
    assert!(!miss.ok());
    assert!(miss.expanded_expression().starts_with("1.0000000000"));
    assert!(miss.expanded_expression().ends_with(" == Approx( 2)"));
}

#[test]
fn results_serialize_for_reporters() {
    let ctx = ctx();
    let a = 1;
    let b = 2;
    check!(ctx, a == b);

    let capture = ctx.into_capture();
    let json = serde_json::to_value(&capture.results()[0]).expect("serialize");
    assert_eq!(json["expanded"], "1 == 2");
    assert_eq!(json["kind"], "ExpressionFailed");
}
