use std::fs::{self};

use formulary::{evaluate, variant::Variant};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_formula_blocks(&content).into_iter().enumerate() {
            for line in block.lines().map(str::trim).filter(|line| !line.is_empty()) {
                count += 1;
                match evaluate(line) {
                    Ok(Variant::Boolean(true)) => {},
                    Ok(other) => panic!("Example {} in {:?} evaluated to {other}:\n{line}", i + 1, path),
                    Err(e) => panic!("Example {} in {:?} failed:\n{line}\nError: {e}", i + 1, path),
                }
            }
        }
    }

    assert!(count > 0, "No formulary examples found in book/src");
}

fn extract_formula_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```formulary") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_true(src: &str) {
    match evaluate(src) {
        Ok(Variant::Boolean(true)) => {},
        Ok(other) => panic!("'{src}' evaluated to {other} instead of true"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, code: &str) {
    match evaluate(src) {
        Ok(value) => panic!("'{src}' succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.code(), code, "'{src}' failed with the wrong error: {e}"),
    }
}

#[test]
fn arithmetic() {
    assert_true("1 + 2 = 3");
    assert_true("7 * 9 = 63");
    assert_true("8 - 5 = 3");
    assert_true("10 / 2 = 5");
    assert_true("2 * (3 + 4) * 5 = 70");
    assert_true("1 - 2 - 3 = -4");
}

#[test]
fn precedence_of_logic_and_comparison() {
    assert_true("1 < 2 AND 3 > 2");
    assert_true("NOT 1 = 2");
    assert_true("1 = 2 AND false OR true");
    assert_true("NOT (1 = 1 OR true AND false)");
}

#[test]
fn case_insensitive_names() {
    assert_true("SQRT(4) = sqrt(4)");
    assert_true("pi() = PI()");
    assert_true("x = X OR x IS NULL");
}

#[test]
fn quoted_identifiers() {
    assert_true("\"my var\" IS NULL");
    assert_true("\"AND\" IS NULL");
}

#[test]
fn syntax_errors() {
    assert_failure("1 +", "UNEXPECTED_END");
    assert_failure("(1", "MISSED_CLOSE_PARENTHESIS");
    assert_failure("Max(1, 2", "MISSED_CLOSE_PARENTHESIS");
    assert_failure("a[0", "MISSED_CLOSE_SQUARE_BRACKET");
    assert_failure("1 1", "ERROR_NEAR");
    assert_failure(")", "ERROR_AT");
    assert_failure("a ! b", "UNKNOWN_SYMBOL");
}

#[test]
fn runtime_errors() {
    assert_failure("Unknown(1)", "FUNC_NOT_FOUND");
    assert_failure("1 / 0", "DIVISION_BY_ZERO");
    assert_failure("Array(1)[1]", "INDEX_OUT_OF_RANGE");
    assert_failure("'a' * 2", "UNSUPPORTED_OPERATION");
    assert_failure("Choose(5, 1, 2)", "INVALID_ARGUMENT");
    assert_failure("Abs(1, 2)", "WRONG_PARAM_COUNT");
}
