pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// A character outside the signature grammar, with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub found: char,
    pub span: Range<usize>,
}

/// Tokenize a signature, stopping at the first character that is not a type code.
pub fn lex(signature: &str) -> Result<Vec<Token>, LexError> {
    Token::lexer(signature)
        .spanned()
        .map(|(result, span)| {
            result.map_err(|()| LexError {
                found: signature
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                span,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
