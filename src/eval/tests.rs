use super::{EvalErrorKind, Value, eval_expr};
use frac_number::{NumberErrorKind, Rational};

macro_rules! check_eval {
    ($test_name: ident, $input: expr, $expected: expr) => {
        #[test]
        fn $test_name() {
            assert_eq!(
                eval_expr($input.as_bytes()),
                Ok($expected),
                "{:?}",
                $input,
            );
        }
    };
}

macro_rules! check_eval_err {
    ($test_name: ident, $input: expr, $expected: expr) => {
        #[test]
        fn $test_name() {
            assert_eq!(
                eval_expr($input.as_bytes()).map_err(|e| e.kind),
                Err($expected),
                "{:?}",
                $input,
            );
        }
    };
}

fn rat(numer: u64, denom: u64) -> Value {
    Value::Rational(Rational::new(numer, denom))
}

check_eval!(eval_literal, "3", rat(3, 1));
check_eval!(eval_literal_normalized, "2/6", rat(1, 3));
check_eval!(eval_scalar_mul, "1/3 * 2", rat(2, 3));
check_eval!(eval_scalar_mul_rev, "2 * 1/3", rat(2, 3));
check_eval!(eval_rational_mul, "3 * 1/3", rat(1, 1));
check_eval!(eval_chained_mul, "1/3*2*1/3", rat(2, 9));
check_eval!(eval_eq, "1/3 == 2/6", Value::Bool(true));
check_eval!(eval_neq, "1/3 != 3/6", Value::Bool(true));
check_eval!(eval_lt, "1/4 < 1/3", Value::Bool(true));
check_eval!(eval_lt_self, "1/3 < 1/3", Value::Bool(false));
check_eval!(eval_leq, "1/3 <= 1/3", Value::Bool(true));
check_eval!(eval_gt, "1/4 > 1/3", Value::Bool(false));
check_eval!(eval_geq, "1/3>=1/4", Value::Bool(true));
check_eval!(eval_mul_then_cmp, "1/3 * 2 == 2/3", Value::Bool(true));
check_eval!(eval_cmp_products, "2 * 1/4 < 3 * 1/4", Value::Bool(true));
check_eval!(eval_spaced_literal, "1 / 3", rat(1, 3));
check_eval!(eval_spaced_literal_mul, "2 / 6 * 2", rat(2, 3));
check_eval!(eval_half_spaced_literals, "1 /3 < 1/ 2", Value::Bool(true));

check_eval_err!(eval_empty, "   ", EvalErrorKind::EmptyExpr);
check_eval_err!(eval_trailing_mul, "1/3 *", EvalErrorKind::UnexpectedEnd);
check_eval_err!(eval_trailing_cmp, "1/3 <", EvalErrorKind::UnexpectedEnd);
check_eval_err!(eval_leading_mul, "* 2", EvalErrorKind::UnexpectedToken(String::from("*")));
check_eval_err!(eval_two_numbers, "1 2", EvalErrorKind::UnexpectedToken(String::from("2/1")));
check_eval_err!(
    eval_spaced_missing_denom,
    "1 / ",
    EvalErrorKind::Number(frac_number::NumberError { kind: NumberErrorKind::MissingDenominator })
);
check_eval_err!(eval_chained_cmp, "1 < 2 < 3", EvalErrorKind::UnexpectedToken(String::from("<")));
check_eval_err!(eval_lone_eq, "1 = 1", EvalErrorKind::UnexpectedChar('='));
check_eval_err!(eval_bad_char, "1 + 1", EvalErrorKind::UnexpectedChar('+'));
check_eval_err!(
    eval_zero_denom,
    "1/0 * 2",
    EvalErrorKind::Number(frac_number::NumberError { kind: NumberErrorKind::DivideByZero { numer: 1 } })
);
check_eval_err!(
    eval_overflow,
    "18446744073709551615 * 2",
    EvalErrorKind::Number(frac_number::NumberError {
        kind: NumberErrorKind::Overflow { numer: u64::MAX as u128 * 2, denom: 1 },
    })
);

#[test]
fn value_fmt_test() {
    assert_eq!(rat(2, 6).to_string(), "1/3");
    assert_eq!(Value::Bool(true).to_string(), "true");
}
