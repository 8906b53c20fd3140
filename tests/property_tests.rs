//! Property-based tests for dispatch and grade banding

use primer::calc::{self, CalcError, Operator};
use primer::grading::{GradeReport, LetterGrade};
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn band_of(mean: f64) -> LetterGrade {
    if mean >= 90.0 {
        LetterGrade::A
    } else if mean >= 80.0 {
        LetterGrade::B
    } else if mean >= 70.0 {
        LetterGrade::C
    } else if mean >= 60.0 {
        LetterGrade::D
    } else {
        LetterGrade::F
    }
}

proptest! {
    #[test]
    fn test_dispatch_matches_arithmetic(lhs in operand(), rhs in operand()) {
        prop_assert_eq!(calc::evaluate(lhs, '+', rhs).unwrap().result, lhs + rhs);
        prop_assert_eq!(calc::evaluate(lhs, '-', rhs).unwrap().result, lhs - rhs);
        prop_assert_eq!(calc::evaluate(lhs, '*', rhs).unwrap().result, lhs * rhs);
        if rhs != 0.0 {
            prop_assert_eq!(calc::evaluate(lhs, '/', rhs).unwrap().result, lhs / rhs);
        }
    }

    #[test]
    fn test_printed_result_uses_two_decimals(lhs in operand(), rhs in operand()) {
        let calculation = calc::evaluate(lhs, '+', rhs).unwrap();
        let expected = format!("{:.2} + {:.2} = {:.2}", lhs, rhs, lhs + rhs);
        prop_assert_eq!(calculation.to_string(), expected);
    }

    #[test]
    fn test_division_by_zero_never_yields_a_number(lhs in operand()) {
        prop_assert_eq!(calc::evaluate(lhs, '/', 0.0), Err(CalcError::DivisionByZero));
        prop_assert_eq!(Operator::Divide.apply(lhs, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_only_four_operators_are_accepted(c in any::<char>()) {
        let accepted = matches!(c, '+' | '-' | '*' | '/');
        prop_assert_eq!(Operator::try_from(c).is_ok(), accepted);
        if !accepted {
            prop_assert_eq!(calc::evaluate(1.0, c, 1.0), Err(CalcError::UnknownOperator(c)));
        }
    }

    #[test]
    fn test_letter_matches_band(a in 0.0..100.0f64, b in 0.0..100.0f64, c in 0.0..100.0f64) {
        let report = GradeReport::from_scores([a, b, c]);
        prop_assert_eq!(report.letter, band_of(report.mean));
        prop_assert_eq!(report.passed, report.mean >= 60.0);
        prop_assert_eq!(report.honor_roll, report.mean >= 85.0);
        prop_assert_eq!(report.points_to_pass().is_some(), !report.passed);
    }

    #[test]
    fn test_grades_are_monotonic(low in -50.0..150.0f64, delta in 0.0..50.0f64) {
        let lower = LetterGrade::from_mean(low);
        let higher = LetterGrade::from_mean(low + delta);
        // A sorts first, so a higher mean never sorts after a lower one
        prop_assert!((higher as u8) <= (lower as u8));
    }
}

#[test]
fn test_boundaries_go_to_higher_band() {
    assert_eq!(LetterGrade::from_mean(90.0), LetterGrade::A);
    assert_eq!(LetterGrade::from_mean(80.0), LetterGrade::B);
    assert_eq!(LetterGrade::from_mean(70.0), LetterGrade::C);
    assert_eq!(LetterGrade::from_mean(60.0), LetterGrade::D);
}
