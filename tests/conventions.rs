use equate::{
    ConventionError, EquationCompiler, ErrorKind, NumericConvention,
    compiler::{lexer::tokenize, token::TokenCategory},
};

fn calculate_with(src: &str, convention: NumericConvention) -> Result<f64, ErrorKind> {
    EquationCompiler::builder().expression(src)
                               .convention(convention)
                               .build()
                               .calculate()
                               .map_err(|e| e.kind())
}

fn texts(src: &str, convention: &NumericConvention) -> Vec<String> {
    tokenize(src, convention).unwrap()
                             .into_iter()
                             .map(|t| t.text)
                             .collect()
}

#[test]
fn comma_decimal_reads_fractions() {
    let comma = NumericConvention::comma_decimal();
    assert_eq!(calculate_with("4,2", comma), Ok(4.2));
    assert_eq!(calculate_with("4.200,5", comma), Ok(4200.5));
    assert_eq!(calculate_with("max(1,5; 2,5)", comma), Ok(2.5));
}

#[test]
fn invariant_groups_with_commas() {
    let invariant = NumericConvention::invariant();
    assert_eq!(calculate_with("4,200", invariant), Ok(4200.0));
    assert_eq!(calculate_with("1,000,000.25", invariant), Ok(1_000_000.25));
    assert_eq!(calculate_with("4,2", invariant), Ok(42.0));
    assert_eq!(calculate_with("4,,2", invariant), Err(ErrorKind::NumericFormat));
}

#[test]
fn default_convention_is_invariant() {
    assert_eq!(NumericConvention::default(), NumericConvention::invariant());
    assert_eq!(EquationCompiler::new().convention(), &NumericConvention::invariant());
}

#[test]
fn apostrophe_grouping() {
    let swiss = NumericConvention::apostrophe_grouping();
    assert_eq!(calculate_with("1'234.5", swiss), Ok(1234.5));
    assert_eq!(calculate_with("1'234 + 1", swiss), Ok(1235.0));
    assert_eq!(calculate_with("1,234", swiss), Err(ErrorKind::InvalidEquation));
}

#[test]
fn detached_group_separator_is_not_part_of_a_literal() {
    let invariant = NumericConvention::invariant();
    assert_eq!(texts("4, 2", &invariant), ["4", ",", "2"]);
    assert_eq!(texts("4,", &invariant), ["4", ","]);
    assert_eq!(calculate_with("4, 2", invariant), Err(ErrorKind::InvalidEquation));
}

#[test]
fn tokens_carry_categories_and_positions() {
    let tokens = tokenize("max(a1; 2.5)>=3", &NumericConvention::invariant()).unwrap();

    let summary = tokens.iter()
                        .map(|t| (t.text.as_str(), t.category, t.position))
                        .collect::<Vec<_>>();
    assert_eq!(summary,
               [("max", TokenCategory::Letter, 0),
                ("(", TokenCategory::Delimiter, 3),
                ("a1", TokenCategory::Letter, 4),
                (";", TokenCategory::Delimiter, 6),
                ("2.5", TokenCategory::Number, 8),
                (")", TokenCategory::Delimiter, 11),
                (">=", TokenCategory::Delimiter, 12),
                ("3", TokenCategory::Number, 14)]);
}

#[test]
fn digits_followed_by_letters_split() {
    let invariant = NumericConvention::invariant();
    assert_eq!(texts("2x", &invariant), ["2", "x"]);
    assert_eq!(texts("x2", &invariant), ["x2"]);
}

#[test]
fn custom_separators() {
    let convention = NumericConvention::new('#', '~').unwrap();
    assert_eq!(calculate_with("1~000#5 * 2", convention), Ok(2001.0));
    assert_eq!(calculate_with("1.5", convention), Err(ErrorKind::InvalidEquation));
}

#[test]
fn invalid_conventions_are_rejected() {
    assert_eq!(NumericConvention::new(',', ','),
               Err(ConventionError::IdenticalSeparators(',')));
    for reserved in ['1', 'a', '_', ' ', '+', '(', ';', '!'] {
        assert_eq!(NumericConvention::new(reserved, '#'),
                   Err(ConventionError::ReservedSeparator(reserved)));
        assert_eq!(NumericConvention::new('#', reserved),
                   Err(ConventionError::ReservedSeparator(reserved)));
    }
}
