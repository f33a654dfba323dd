use equate::{CompileError, ErrorKind, evaluate};

fn kind_of(src: &str) -> ErrorKind {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e.kind(),
    }
}

#[test]
fn argument_count_violations() {
    for src in ["abs()",
                "abs(1;2)",
                "min(1)",
                "min(1;)",
                "min(;2)",
                "min(1;2;3)",
                "if(1>2;;3)",
                "if(1;2)",
                "max(;)"]
    {
        assert_eq!(kind_of(src), ErrorKind::ArgumentCount, "'{src}'");
    }
}

#[test]
fn argument_count_errors_name_the_function() {
    let err = evaluate("min(1;2;3)").unwrap_err();
    assert_eq!(err,
               CompileError::ArgumentCountMismatch { name:     "min".to_string(),
                                                     expected: 2,
                                                     found:    3, });

    let err = evaluate("min(1;)").unwrap_err();
    assert_eq!(err,
               CompileError::MissingArgument { name:     "min".to_string(),
                                               position: 6, });
}

#[test]
fn unmatched_parentheses_report_their_position() {
    assert_eq!(evaluate("abs(-5))").unwrap_err(),
               CompileError::UnmatchedParentheses { position: 7 });
    assert_eq!(evaluate("abs(-5").unwrap_err(),
               CompileError::UnmatchedParentheses { position: 6 });
}

#[test]
fn unknown_function() {
    let err = evaluate("1 + foo(2)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFunction);
    assert_eq!(err,
               CompileError::UnknownFunction { name:     "foo".to_string(),
                                               position: 4, });
}

#[test]
fn unknown_function_is_reported_before_its_arguments() {
    assert_eq!(kind_of("foo(;)"), ErrorKind::InvalidFunction);
}

#[test]
fn invalid_character_reports_offset() {
    assert_eq!(evaluate("12 $ 3").unwrap_err(),
               CompileError::InvalidCharacter { character: '$',
                                                position:  3, });
}

#[test]
fn trailing_operator_is_unexpected_end() {
    assert_eq!(evaluate("4 +").unwrap_err(), CompileError::UnexpectedEndOfInput);
    assert_eq!(evaluate("").unwrap_err(), CompileError::EmptyExpression);
}

#[test]
fn leftover_tokens_are_reported() {
    assert_eq!(evaluate("4!2").unwrap_err(),
               CompileError::UnexpectedToken { token:    "!".to_string(),
                                               position: 1, });
}

#[test]
fn malformed_literals() {
    assert_eq!(kind_of("1.2.3"), ErrorKind::NumericFormat);
    assert_eq!(kind_of("4,,2"), ErrorKind::NumericFormat);
    assert_eq!(kind_of("4,.2"), ErrorKind::NumericFormat);
    assert_eq!(kind_of("1.5,0"), ErrorKind::NumericFormat);
    assert_eq!(kind_of("."), ErrorKind::NumericFormat);
}

#[test]
fn error_kinds() {
    let operator = CompileError::UnknownOperator { symbol:   "=".to_string(),
                                                   position: 0, };
    assert_eq!(operator.kind(), ErrorKind::InvalidOperator);
    assert_eq!(CompileError::UnexpectedEndOfInput.kind(), ErrorKind::InvalidEquation);
}

#[test]
fn messages_name_the_offending_token() {
    let message = evaluate("2 * (3 + x))").unwrap_err().to_string();
    assert!(message.contains("11"), "{message}");

    let message = evaluate("nope(1)").unwrap_err().to_string();
    assert!(message.contains("nope"), "{message}");
}

#[test]
fn every_grammar_operator_is_registered() {
    use equate::compiler::{
        parser::binary::{
            ADDITIVE_OPERATORS, MODULO_OPERATORS, MULTIPLICATIVE_OPERATORS, POWER_OPERATORS,
            RELATIONAL_OPERATORS,
        },
        registry::operators::{OPERATOR_SYMBOLS, OperatorTable},
    };

    let table = OperatorTable::standard();
    let levels = [RELATIONAL_OPERATORS,
                  ADDITIVE_OPERATORS,
                  MULTIPLICATIVE_OPERATORS,
                  MODULO_OPERATORS,
                  POWER_OPERATORS];

    for symbol in levels.concat() {
        assert!(table.contains(symbol), "'{symbol}' has no registered meaning");
    }
    assert_eq!(table.symbols().count(), OPERATOR_SYMBOLS.len());
}
