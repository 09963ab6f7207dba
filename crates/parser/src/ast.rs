// crates/parser/src/ast.rs

use std::fmt;

/// Single-character types: numerics, string-likes and the fd handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicType {
    Byte,
    Boolean,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Double,
    UnixFd,
    String,
    ObjectPath,
    Signature,
}

impl BasicType {
    pub const ALL: [BasicType; 13] = [
        BasicType::Byte,
        BasicType::Boolean,
        BasicType::Int16,
        BasicType::UInt16,
        BasicType::Int32,
        BasicType::UInt32,
        BasicType::Int64,
        BasicType::UInt64,
        BasicType::Double,
        BasicType::UnixFd,
        BasicType::String,
        BasicType::ObjectPath,
        BasicType::Signature,
    ];

    pub fn code(self) -> char {
        match self {
            BasicType::Byte => 'y',
            BasicType::Boolean => 'b',
            BasicType::Int16 => 'n',
            BasicType::UInt16 => 'q',
            BasicType::Int32 => 'i',
            BasicType::UInt32 => 'u',
            BasicType::Int64 => 'x',
            BasicType::UInt64 => 't',
            BasicType::Double => 'd',
            BasicType::UnixFd => 'h',
            BasicType::String => 's',
            BasicType::ObjectPath => 'o',
            BasicType::Signature => 'g',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|basic| basic.code() == code)
    }
}

/// One complete type of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Basic(BasicType),

    // Payload type travels with the value, not in the signature.
    Variant,

    Array(Box<TypeNode>),

    // Only valid as an array element; the parser never produces it elsewhere.
    DictEntry {
        key: BasicType,
        value: Box<TypeNode>,
    },

    // Never empty: `()` is rejected by the grammar.
    Struct(Vec<TypeNode>),
}

impl TypeNode {
    pub fn is_basic(&self) -> bool {
        matches!(self, TypeNode::Basic(_))
    }

    /// Canonical signature text for this type.
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Basic(basic) => write!(f, "{}", basic.code()),
            TypeNode::Variant => f.write_str("v"),
            TypeNode::Array(element) => write!(f, "a{}", element),
            TypeNode::DictEntry { key, value } => write!(f, "{{{}{}}}", key.code(), value),
            TypeNode::Struct(members) => {
                f.write_str("(")?;
                for member in members {
                    write!(f, "{}", member)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The types of a whole signature, in order. Empty means "no arguments".
pub type Sequence = Vec<TypeNode>;

/// Render a sequence back into signature text.
pub fn render(sequence: &[TypeNode]) -> String {
    sequence.iter().map(TypeNode::signature).collect()
}
