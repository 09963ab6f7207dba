// Layout calculation
//
// Alignment, fixed/variable classification and fixed size for a type tree.
// A struct body and a top-level sequence follow the same rule: each member
// starts at its own alignment, and the total is padded to the largest
// member alignment.

use parser::ast::{BasicType, TypeNode};

/// Encoding layout of a type or a sequence of types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Byte boundary the encoding starts on: 1, 2, 4 or 8.
    pub alignment: usize,
    /// Encoded length when it does not depend on the value.
    pub size: Option<usize>,
}

impl Layout {
    pub const fn fixed(alignment: usize, size: usize) -> Self {
        Layout {
            alignment,
            size: Some(size),
        }
    }

    pub const fn variable(alignment: usize) -> Self {
        Layout {
            alignment,
            size: None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.size.is_some()
    }

    pub fn of_basic(basic: BasicType) -> Self {
        match basic {
            BasicType::Byte | BasicType::Boolean => Layout::fixed(1, 1),
            BasicType::Int16 | BasicType::UInt16 => Layout::fixed(2, 2),
            BasicType::Int32 | BasicType::UInt32 | BasicType::UnixFd => Layout::fixed(4, 4),
            BasicType::Int64 | BasicType::UInt64 | BasicType::Double => Layout::fixed(8, 8),
            BasicType::String | BasicType::ObjectPath | BasicType::Signature => Layout::variable(1),
        }
    }

    pub fn of_type(node: &TypeNode) -> Self {
        match node {
            TypeNode::Basic(basic) => Layout::of_basic(*basic),
            TypeNode::Variant => Layout::variable(8),
            // Element count is never known statically.
            TypeNode::Array(element) => Layout::variable(Layout::of_type(element).alignment),
            TypeNode::DictEntry { key, value } => {
                Layout::combine([Layout::of_basic(*key), Layout::of_type(value)])
            }
            TypeNode::Struct(members) => Layout::of_sequence(members),
        }
    }

    /// Layout of members laid out back to back, as in a struct body.
    pub fn of_sequence(members: &[TypeNode]) -> Self {
        Layout::combine(members.iter().map(Layout::of_type))
    }

    /// Fold member layouts in order. An empty fold is fixed with size 0
    /// and alignment 1.
    pub fn combine(members: impl IntoIterator<Item = Layout>) -> Self {
        let mut alignment = 1;
        let mut end = Some(0);

        for member in members {
            alignment = alignment.max(member.alignment);
            end = match (end, member.size) {
                (Some(end), Some(size)) => Some(round_up(end, member.alignment) + size),
                _ => None,
            };
        }

        let layout = Layout {
            alignment,
            size: end.map(|end| round_up(end, alignment)),
        };
        debug_assert!(layout.alignment.is_power_of_two() && layout.alignment <= 8);
        debug_assert!(layout.size.is_none_or(|size| size % layout.alignment == 0));
        layout
    }
}

/// Smallest multiple of `alignment` that is at least `offset`.
pub fn round_up(offset: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    offset.next_multiple_of(alignment)
}
