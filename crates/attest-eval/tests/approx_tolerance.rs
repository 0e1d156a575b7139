use attest_core::{ResultKind, SourceLocation};
use attest_eval::{op, Approx, ResultBuilder, ReverseBuilder};
use attest_render::rendered;
use proptest::prelude::*;

#[test]
fn absolute_tolerance_absorbs_tiny_differences() {
    assert!(Approx::new(1.0) == 1.0 + 5e-11);
    assert!(1.0 + 5e-11 == Approx::new(1.0));
    assert!(Approx::new(0.0) == 1e-11);
}

#[test]
fn clearly_different_values_stay_unequal() {
    assert!(Approx::new(1.0) != 1.2);
    assert!(1.2 != Approx::new(1.0));
}

#[test]
fn relative_tolerance_scales_with_magnitude() {
    assert!(Approx::new(1e6) == 1e6 + 5e-5);
    assert!(Approx::new(1e6) != 1e6 + 1.0);
}

#[test]
fn single_precision_operands_compare() {
    assert!(1.0_f32 == Approx::new(1.0));
    assert!(Approx::new(0.25) == 0.25_f32);
}

#[test]
fn display_renders_the_exact_target() {
    assert_eq!(Approx::new(1.0).to_string(), "Approx( 1)");
    assert_eq!(Approx::new(2.5).to_string(), "Approx( 2.5)");
}

#[test]
fn approx_expands_inside_a_comparison_chain() {
    let measured = 1.25_f64;
    let expected = Approx::new(1.3);
    let mut builder = ResultBuilder::new(
        "check!",
        SourceLocation {
            file: "tests/approx_tolerance.rs",
            line: 1,
        },
        "measured == expected",
        false,
    );
    builder
        .seed(&measured, rendered!(measured))
        .close::<op::Eq, _>(ReverseBuilder::new().seed(&expected, rendered!(expected)));

    let result = builder.into_result();
    assert_eq!(result.kind(), ResultKind::ExpressionFailed);
    assert_eq!(result.expanded_expression(), "1.25 == Approx( 1.3)");
}

proptest! {
    #[test]
    fn comparison_is_symmetric(target in -1e9_f64..1e9, value in -1e9_f64..1e9) {
        let approx = Approx::new(target);
        prop_assert_eq!(approx == value, value == approx);
    }

    #[test]
    fn every_target_matches_itself(target in -1e9_f64..1e9) {
        prop_assert!(Approx::new(target) == target);
    }
}
