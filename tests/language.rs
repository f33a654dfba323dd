use equate::{ErrorKind, evaluate};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}' failed with {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("7 % 3", 1.0);
    assert_value("2 ^ 10", 1024.0);
}

#[test]
fn precedence() {
    assert_value("3 + 4 / 2", 5.0);
    assert_value("(3 + 4) / 2", 3.5);
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("1 + 2 < 4", 1.0);
}

#[test]
fn modulo_binds_tighter_than_multiplication() {
    assert_value("7 * 5 % 3", 14.0);
    assert_value("20 / 7 % 4", 20.0 / 3.0);
}

#[test]
fn left_associative_levels() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 ^ 3 ^ 2", 64.0);
}

#[test]
fn relational_chains_group_to_the_right() {
    // 1 < (2 < 3) is 1 < 1
    assert_value("1 < 2 < 3", 0.0);
    assert_value("3 > 2 > 1", 1.0);
    assert_value("2 < 3 == 1", 0.0);
}

#[test]
fn signs() {
    assert_value("-5", -5.0);
    assert_value("+5", 5.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("4--3", 7.0);
    assert_value("2*-3", -6.0);
    assert_value("-2^2", 4.0);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_value("2 < 3", 1.0);
    assert_value("3 < 2", 0.0);
    assert_value("2 <= 2", 1.0);
    assert_value("3 > 2", 1.0);
    assert_value("3 >= 4", 0.0);
    assert_value("2 == 2", 1.0);
    assert_value("2 != 3", 1.0);
    assert_value("5 <> 5", 0.0);
}

#[test]
fn logical_operators_treat_nonzero_as_true() {
    assert_value("1 && 0", 0.0);
    assert_value("2 && -1", 1.0);
    assert_value("0 || 0", 0.0);
    assert_value("0 || 0.5", 1.0);
    assert_value("(1 < 2) && (3 < 4)", 1.0);
    // 1 < (2 && (3 < 4))
    assert_value("1 < 2 && 3 < 4", 0.0);
}

#[test]
fn floating_point_edge_cases_are_not_errors() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert!(evaluate("log(-1)").unwrap().is_nan());
    assert!(evaluate("sqrt(-4)").unwrap().is_nan());
    assert!(evaluate("5 % 0").unwrap().is_nan());
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  1+2  ", 3.0);
    assert_value("\t(1 +\n2) * 3\r\n", 9.0);
    assert_value("max ( 1 ; 2 )", 2.0);
}

#[test]
fn compound_operators_need_adjacent_characters() {
    assert_value("2 <= 2", 1.0);
    assert_failure("2 < = 2", ErrorKind::InvalidEquation);
    assert_failure("1 & & 1", ErrorKind::InvalidEquation);
}

#[test]
fn malformed_expressions() {
    assert_failure("", ErrorKind::InvalidEquation);
    assert_failure("   ", ErrorKind::InvalidEquation);
    assert_failure("4 +", ErrorKind::InvalidEquation);
    assert_failure("*2", ErrorKind::InvalidEquation);
    assert_failure("--3", ErrorKind::InvalidEquation);
    assert_failure("4!2", ErrorKind::InvalidEquation);
    assert_failure("2a", ErrorKind::InvalidEquation);
    assert_failure("1 2", ErrorKind::InvalidEquation);
    assert_failure("a = 1", ErrorKind::InvalidEquation);
    assert_failure("(1; 2)", ErrorKind::InvalidEquation);
    assert_failure("()", ErrorKind::InvalidEquation);
}

#[test]
fn unknown_characters() {
    for src in ["4~2", "4$2", "4\"2", "4'2", "4#2", "4 @ 2", "é"] {
        assert_failure(src, ErrorKind::InvalidEquation);
    }
}

#[test]
fn unmatched_parentheses() {
    assert_failure("abs(-5", ErrorKind::UnmatchedParentheses);
    assert_failure("abs(-5))", ErrorKind::UnmatchedParentheses);
    assert_failure(")(", ErrorKind::UnmatchedParentheses);
    assert_failure("((1)", ErrorKind::UnmatchedParentheses);
}

#[test]
fn identifiers_may_contain_digits_and_underscores() {
    assert_value("_x1 + x_2", 0.0);
    assert_value("log10(1000)", 1000f64.log10());
}
