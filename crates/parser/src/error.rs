// Signature errors and their Ariadne reports
//
// Every way a signature can be rejected is a `SignatureError`; the variants
// only refine the diagnostic.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::LexError;
use lexer::token::Token;
use std::io;
use std::ops::Range;
use thiserror::Error;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// The signature does not conform to the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("unknown type code {code:?} at offset {offset}")]
    UnknownCode { code: char, offset: usize },

    #[error("unexpected {} at offset {}", describe_found(.found), span_start(.span))]
    Unexpected {
        span: Range<usize>,
        found: Option<char>,
        expected: Vec<String>,
    },

    #[error("signature nests deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },

    #[error("signature is {length} bytes long, the limit is {limit}")]
    TooLong { length: usize, limit: usize },
}

fn span_start(span: &Range<usize>) -> usize {
    span.start
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(code) => format!("{:?}", code),
        None => "end of signature".to_string(),
    }
}

impl SignatureError {
    /// Byte range of the signature the error points at.
    pub fn span(&self) -> Range<usize> {
        match self {
            SignatureError::UnknownCode { code, offset } => *offset..offset + code.len_utf8(),
            SignatureError::Unexpected { span, .. } => span.clone(),
            SignatureError::TooDeep { offset, .. } => *offset..offset + 1,
            SignatureError::TooLong { limit, length } => *limit..*length,
        }
    }

    /// Stable diagnostic code shown in reports.
    pub fn code(&self) -> &'static str {
        match self {
            SignatureError::Unexpected { .. } => "E001",
            SignatureError::UnknownCode { .. } => "E002",
            SignatureError::TooDeep { .. } => "E003",
            SignatureError::TooLong { .. } => "E004",
        }
    }

    /// Pick the first grammar error; spans past the input clamp to its end.
    pub(crate) fn from_parse_errors(errors: Vec<ParseError>, length: usize) -> Self {
        let Some(error) = errors.into_iter().next() else {
            return SignatureError::Unexpected {
                span: length..length,
                found: None,
                expected: Vec::new(),
            };
        };

        let span = error.span();
        let span = span.start.min(length)..span.end.min(length);

        let mut expected: Vec<String> = error.expected().map(format_expected).collect();
        expected.sort();
        expected.dedup();

        let found = match error.reason() {
            SimpleReason::Unclosed { .. } => None,
            _ => error.found().map(|token| token.code()),
        };

        SignatureError::Unexpected {
            span,
            found,
            expected,
        }
    }
}

impl From<LexError> for SignatureError {
    fn from(error: LexError) -> Self {
        SignatureError::UnknownCode {
            code: error.found,
            offset: error.span.start,
        }
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::RParen) => "')' closing the struct".to_string(),
        Some(Token::RBrace) => "'}' closing the dict entry".to_string(),
        Some(t) => t.to_string(),
        None => "end of signature".to_string(),
    }
}

/// Print a signature error as an Ariadne report on stderr.
pub fn report_signature_error(name: &str, signature: &str, error: &SignatureError) -> io::Result<()> {
    let span = error.span();
    // Ariadne needs a character to underline when the signature just ended.
    let span = if span.is_empty() && span.start > 0 {
        span.start - 1..span.start
    } else {
        span
    };

    let label_message = match error {
        SignatureError::UnknownCode { code, .. } => format!("{:?} is not a type code", code),
        SignatureError::Unexpected { found: None, .. } => "signature ends before the type is complete".to_string(),
        SignatureError::Unexpected { found: Some(code), .. } => format!("{:?} is not allowed here", code),
        SignatureError::TooDeep { limit, .. } => format!("nesting level {} opens here", limit + 1),
        SignatureError::TooLong { .. } => "everything from here on is past the limit".to_string(),
    };

    let report = Report::build(ReportKind::Error, name, span.start)
        .with_code(error.code())
        .with_message("Invalid signature")
        .with_label(
            Label::new((name, span))
                .with_message(label_message)
                .with_color(Color::Red),
        );

    // Limit expected list to 5 to keep the help line readable
    let report = match error {
        SignatureError::Unexpected { expected, .. } if !expected.is_empty() => {
            let shown = expected.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
            if expected.len() > 5 {
                report.with_help(format!("Expected one of: {}, ...", shown))
            } else {
                report.with_help(format!("Expected: {}", shown))
            }
        }
        _ => report.with_note(error.to_string()),
    };

    report.finish().eprint((name, Source::from(signature)))
}
