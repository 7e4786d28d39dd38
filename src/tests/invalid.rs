//! Rejected documents. Unlike the teacher's own `invalid.rs` (which
//! documents a *trusted* scanner's best-effort behavior on malformed
//! input), every case here names a concrete `EcjpError` the validating
//! pipeline must return — this parser's whole job is to reject these.

use crate::error::EcjpError;
use crate::{array, token};

fn err(input: &[u8]) -> EcjpError {
    token::check_syntax(input).expect_err("expected a syntax error")
}

#[test]
fn err_trailing_comma_in_object() {
    assert!(matches!(err(br#"{"a":1,}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_trailing_comma_in_array() {
    assert!(matches!(err(br#"[1,2,]"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_missing_colon() {
    assert!(matches!(err(br#"{"a" 1}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_unquoted_key() {
    assert!(matches!(err(br#"{a:1}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_unterminated_string() {
    assert!(matches!(err(br#"{"a":"b}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_bad_escape() {
    assert!(matches!(err(br#"{"a":"\q"}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_incomplete_unicode_escape() {
    assert!(matches!(err(br#"{"a":"\u12"}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_raw_control_char_in_string() {
    let input: &[u8] = b"{\"a\":\"b\tc\"}";
    assert!(matches!(err(input), EcjpError::Syntax { .. }));
}

#[test]
fn err_leading_zero() {
    assert!(matches!(err(br#"{"a":01}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_bare_minus() {
    assert!(matches!(err(br#"{"a":-}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_empty_exponent() {
    assert!(matches!(err(br#"{"a":1e}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_unbalanced_opening_bracket() {
    assert!(matches!(
        err(br#"{"a":1"#),
        EcjpError::Syntax { .. } | EcjpError::BracketsMissing { .. }
    ));
}

#[test]
fn err_unbalanced_closing_bracket() {
    assert!(matches!(err(br#"{"a":1}}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_mismatched_bracket_kinds() {
    assert!(matches!(
        err(br#"{"a":[1,2}"#),
        EcjpError::BracketsMissing { .. }
    ));
}

#[test]
fn err_misspelled_literal() {
    assert!(matches!(err(br#"{"a":tru}"#), EcjpError::Syntax { .. }));
}

#[test]
fn err_empty_document() {
    assert!(matches!(err(b""), EcjpError::EmptyInput));
    assert!(matches!(err(b"   \t\n"), EcjpError::EmptyInput));
}

#[test]
fn err_garbage_after_root_value() {
    assert!(matches!(err(br#"{"a":1}garbage"#), EcjpError::Syntax { .. }));
}

#[test]
fn array_walker_rejects_object_root() {
    assert!(matches!(
        array::read_array_element(br#"{"a":1}"#, 0),
        Err(EcjpError::Syntax { .. })
    ));
}

#[test]
fn never_panics_on_truncated_multibyte_boundary() {
    // Regression guard: indexing must stay in bounds even when a string's
    // closing quote is missing right at EOF.
    let _ = token::check_syntax(br#"{"a":"#);
    let _ = token::check_syntax(br#"{"#);
    let _ = token::check_syntax(br#""#);
    let _ = token::check_syntax(b"\"");
}
