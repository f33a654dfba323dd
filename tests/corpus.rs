use std::fs;

use equate::{ErrorKind, evaluate};
use walkdir::WalkDir;

/// Parses an expected outcome: a number, `nan`, `inf`, `-inf`, or `!Kind`.
fn parse_expected(text: &str) -> Result<f64, ErrorKind> {
    let text = text.trim();
    if let Some(kind) = text.strip_prefix('!') {
        return Err(match kind {
                       "InvalidEquation" => ErrorKind::InvalidEquation,
                       "UnmatchedParentheses" => ErrorKind::UnmatchedParentheses,
                       "InvalidFunction" => ErrorKind::InvalidFunction,
                       "InvalidOperator" => ErrorKind::InvalidOperator,
                       "ArgumentCount" => ErrorKind::ArgumentCount,
                       "NumericFormat" => ErrorKind::NumericFormat,
                       other => panic!("Unknown error kind '{other}'"),
                   });
    }
    Ok(text.parse().unwrap_or_else(|e| panic!("Bad expected value '{text}': {e}")))
}

fn matches(actual: f64, expected: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || actual == expected
}

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "cases"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (source, expected) =
                line.rsplit_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));

            count += 1;
            match (evaluate(source), parse_expected(expected)) {
                (Ok(actual), Ok(expected)) => {
                    assert!(matches(actual, expected),
                            "{path:?}:{}: '{source}' evaluated to {actual}, expected {expected}",
                            i + 1);
                },
                (Err(e), Err(kind)) => {
                    assert_eq!(e.kind(), kind, "{path:?}:{}: '{source}' failed with {e}", i + 1);
                },
                (Ok(actual), Err(kind)) => {
                    panic!("{path:?}:{}: '{source}' evaluated to {actual}, expected {kind:?}",
                           i + 1);
                },
                (Err(e), Ok(expected)) => {
                    panic!("{path:?}:{}: '{source}' failed with {e}, expected {expected}", i + 1);
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
