// Grammar Rejection Tests
//
// Malformed signatures must fail as a whole, never partially parse.

use crate::error::SignatureError;
use crate::{is_valid, parse};

fn assert_unexpected(sig: &str) {
    match parse(sig) {
        Err(SignatureError::Unexpected { span, .. }) => {
            assert!(span.start <= sig.len(), "span {:?} past end of {:?}", span, sig);
        }
        other => panic!("Expected grammar error for {:?}, got {:?}", sig, other),
    }
}

// ==================== UNKNOWN CODES ====================

#[test]
fn test_unknown_code() {
    assert_eq!(
        parse("(uz)").unwrap_err(),
        SignatureError::UnknownCode { code: 'z', offset: 2 }
    );
}

#[test]
fn test_unknown_code_reported_before_grammar() {
    // Both an unclosed struct and a bad code: the bad code is reported.
    assert!(matches!(parse("(k").unwrap_err(), SignatureError::UnknownCode { code: 'k', .. }));
}

// ==================== TRUNCATED TYPES ====================

#[test]
fn test_trailing_array() {
    assert_unexpected("a");
    assert_unexpected("uua");
}

#[test]
fn test_unterminated_struct() {
    assert_unexpected("(");
    assert_unexpected("(uu");
    assert_unexpected("((u)");
}

#[test]
fn test_unterminated_dict_entry() {
    assert_unexpected("a{");
    assert_unexpected("a{s");
    assert_unexpected("a{sv");
}

#[test]
fn test_truncation_reports_end_of_signature() {
    match parse("(uu").unwrap_err() {
        SignatureError::Unexpected { found, .. } => assert_eq!(found, None),
        other => panic!("Expected grammar error, got {:?}", other),
    }
}

// ==================== EMPTY STRUCT ====================

#[test]
fn test_empty_struct_rejected() {
    assert_unexpected("()");
    assert_unexpected("(())");
    assert_unexpected("a()");
    assert_unexpected("u()");
}

// ==================== DICT ENTRIES ====================

#[test]
fn test_dict_entry_outside_array() {
    assert_unexpected("{ss}");
    assert_unexpected("({ss})");
}

#[test]
fn test_dict_key_must_be_basic() {
    assert_unexpected("a{vs}");
    assert_unexpected("a{ays}");
    assert_unexpected("a{(s)s}");
}

#[test]
fn test_dict_entry_needs_exactly_two_types() {
    assert_unexpected("a{}");
    assert_unexpected("a{s}");
    assert_unexpected("a{sss}");
}

// ==================== DELIMITERS ====================

#[test]
fn test_unmatched_closing() {
    assert_unexpected(")");
    assert_unexpected("u)");
    assert_unexpected("(u))");
    assert_unexpected("}");
    assert_unexpected("a{ss}}");
}

#[test]
fn test_mismatched_delimiters() {
    assert_unexpected("(u}");
    assert_unexpected("a{su)");
}

#[test]
fn test_array_before_closing() {
    assert_unexpected("(ua)");
}

#[test]
fn test_is_valid() {
    assert!(is_valid(""));
    assert!(is_valid("a{sv}"));
    assert!(!is_valid("()"));
    assert!(!is_valid("a{vs}"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse("(uz)").unwrap_err().to_string(),
        "unknown type code 'z' at offset 2"
    );
    let message = parse("(uu").unwrap_err().to_string();
    assert!(message.starts_with("unexpected end of signature"), "{}", message);
}

#[test]
fn test_error_codes_are_distinct() {
    let codes = [
        SignatureError::UnknownCode { code: 'z', offset: 0 }.code(),
        SignatureError::Unexpected { span: 0..1, found: None, expected: vec![] }.code(),
        SignatureError::TooDeep { limit: 1, offset: 1 }.code(),
        SignatureError::TooLong { length: 3, limit: 2 }.code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_report_does_not_fail() {
    for sig in ["(uz)", "(uu", "()", "a{vs}"] {
        let err = parse(sig).unwrap_err();
        crate::report_signature_error("test", sig, &err).unwrap();
    }
}
