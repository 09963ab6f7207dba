use logos::Logos;
use std::fmt;

/// One signature type code. Every code is a single ASCII byte, so a token
/// index in a lexed signature equals its byte offset.
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Token {
    // --- Fixed-size basic codes ---
    #[token("y")]
    Byte,

    #[token("b")]
    Boolean,

    #[token("n")]
    Int16,

    #[token("q")]
    UInt16,

    #[token("i")]
    Int32,

    #[token("u")]
    UInt32,

    #[token("x")]
    Int64,

    #[token("t")]
    UInt64,

    #[token("d")]
    Double,

    #[token("h")]
    UnixFd, // Handle: index into the out-of-band fd array

    // --- Variable-size basic codes ---
    #[token("s")]
    String,

    #[token("o")]
    ObjectPath,

    #[token("g")]
    Signature,

    // --- Containers ---
    #[token("v")]
    Variant,

    #[token("a")]
    Array,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

impl Token {
    /// The character this token was lexed from.
    pub fn code(self) -> char {
        match self {
            Token::Byte => 'y',
            Token::Boolean => 'b',
            Token::Int16 => 'n',
            Token::UInt16 => 'q',
            Token::Int32 => 'i',
            Token::UInt32 => 'u',
            Token::Int64 => 'x',
            Token::UInt64 => 't',
            Token::Double => 'd',
            Token::UnixFd => 'h',
            Token::String => 's',
            Token::ObjectPath => 'o',
            Token::Signature => 'g',
            Token::Variant => 'v',
            Token::Array => 'a',
            Token::LParen => '(',
            Token::RParen => ')',
            Token::LBrace => '{',
            Token::RBrace => '}',
        }
    }

    /// True for the single-character codes that may key a dict entry.
    pub fn is_basic(self) -> bool {
        !matches!(
            self,
            Token::Variant | Token::Array | Token::LParen | Token::RParen | Token::LBrace | Token::RBrace
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}'", self.code())
    }
}
