pub mod ast;
pub mod error;
pub mod limits;
pub mod parser;

pub use ast::{BasicType, Sequence, TypeNode};
pub use error::{SignatureError, report_signature_error};
pub use limits::ParseLimits;

use chumsky::Parser;
use lexer::token::Token;
use log::{debug, trace};

/// Parse a signature into its sequence of complete types using default limits.
pub fn parse(signature: &str) -> Result<Sequence, SignatureError> {
    parse_with(signature, &ParseLimits::default())
}

pub fn parse_with(signature: &str, limits: &ParseLimits) -> Result<Sequence, SignatureError> {
    let tokens = tokenize(signature, limits)?;
    let sequence = parser::parser()
        .parse(tokens)
        .map_err(|errors| rejected(signature, SignatureError::from_parse_errors(errors, signature.len())))?;

    trace!("parsed signature {:?} into {} type(s)", signature, sequence.len());
    Ok(sequence)
}

/// Parse a signature that must hold exactly one complete type.
pub fn parse_single(signature: &str) -> Result<TypeNode, SignatureError> {
    parse_single_with(signature, &ParseLimits::default())
}

pub fn parse_single_with(signature: &str, limits: &ParseLimits) -> Result<TypeNode, SignatureError> {
    let tokens = tokenize(signature, limits)?;
    parser::single_type_parser()
        .parse(tokens)
        .map_err(|errors| rejected(signature, SignatureError::from_parse_errors(errors, signature.len())))
}

/// True when the signature parses under the default limits.
pub fn is_valid(signature: &str) -> bool {
    parse(signature).is_ok()
}

/// Lex and apply the length and depth caps before any recursive parsing.
fn tokenize(signature: &str, limits: &ParseLimits) -> Result<Vec<Token>, SignatureError> {
    if let Some(limit) = limits.max_length {
        if signature.len() > limit {
            return Err(rejected(
                signature,
                SignatureError::TooLong {
                    length: signature.len(),
                    limit,
                },
            ));
        }
    }

    let tokens = lexer::lex(signature).map_err(|e| rejected(signature, e.into()))?;
    parser::check_depth(&tokens, limits.effective_max_depth()).map_err(|e| rejected(signature, e))?;
    Ok(tokens)
}

fn rejected(signature: &str, error: SignatureError) -> SignatureError {
    debug!("rejected signature {:?}: {}", signature, error);
    error
}

#[cfg(test)]
mod tests;
