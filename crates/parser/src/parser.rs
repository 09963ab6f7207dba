use crate::ast::{BasicType, Sequence, TypeNode};
use crate::error::SignatureError;
use chumsky::prelude::*;
use lexer::token::Token;

/// A whole signature: zero or more complete types up to end of input.
pub fn parser() -> impl Parser<Token, Sequence, Error = Simple<Token>> {
    type_parser().repeated().then_ignore(end())
}

/// Exactly one complete type and nothing after it.
pub fn single_type_parser() -> impl Parser<Token, TypeNode, Error = Simple<Token>> {
    type_parser().then_ignore(end())
}

fn basic_parser() -> impl Parser<Token, BasicType, Error = Simple<Token>> + Clone {
    select! {
        Token::Byte => BasicType::Byte,
        Token::Boolean => BasicType::Boolean,
        Token::Int16 => BasicType::Int16,
        Token::UInt16 => BasicType::UInt16,
        Token::Int32 => BasicType::Int32,
        Token::UInt32 => BasicType::UInt32,
        Token::Int64 => BasicType::Int64,
        Token::UInt64 => BasicType::UInt64,
        Token::Double => BasicType::Double,
        Token::UnixFd => BasicType::UnixFd,
        Token::String => BasicType::String,
        Token::ObjectPath => BasicType::ObjectPath,
        Token::Signature => BasicType::Signature,
    }
    .labelled("basic type")
}

fn type_parser() -> impl Parser<Token, TypeNode, Error = Simple<Token>> + Clone {
    recursive(|ty| {
        // {K V}: basic key, exactly one value type
        let dict_entry = basic_parser()
            .then(ty.clone())
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(|(key, value)| TypeNode::DictEntry {
                key,
                value: Box::new(value),
            });

        let array = just(Token::Array)
            .ignore_then(dict_entry.or(ty.clone()))
            .map(|element| TypeNode::Array(Box::new(element)));

        let structure = ty
            .repeated()
            .at_least(1)
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(TypeNode::Struct);

        basic_parser()
            .map(TypeNode::Basic)
            .or(just(Token::Variant).to(TypeNode::Variant))
            .or(array)
            .or(structure)
            .labelled("complete type")
    })
}

/// Walks the tokens once without recursion and fails as soon as nesting
/// exceeds `max_depth`. `a`, `(` and `{` each open a level; a level opened
/// by `a` closes once its element type is complete.
///
/// Unbalanced delimiters are not reported here, the grammar rejects them.
pub fn check_depth(tokens: &[Token], max_depth: usize) -> Result<(), SignatureError> {
    let mut open: Vec<Token> = Vec::new();

    for (offset, &token) in tokens.iter().enumerate() {
        match token {
            Token::Array | Token::LParen | Token::LBrace => {
                open.push(token);
                if open.len() > max_depth {
                    return Err(SignatureError::TooDeep {
                        limit: max_depth,
                        offset,
                    });
                }
                continue;
            }
            Token::RParen | Token::RBrace => {
                while open.last() == Some(&Token::Array) {
                    open.pop();
                }
                if open.pop().is_none() {
                    return Ok(());
                }
            }
            _ => {}
        }

        // A complete type satisfies every array still waiting for an element.
        while open.last() == Some(&Token::Array) {
            open.pop();
        }
    }

    Ok(())
}
