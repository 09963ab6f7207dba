// Member placement
//
// Where each member of a struct body (or top-level sequence) starts, and
// which members need an entry in the trailing framing-offset table.

use crate::layout::{Layout, round_up};
use parser::ast::TypeNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPlacement {
    pub signature: String,
    pub layout: Layout,
    /// Start offset, known only while every earlier member is fixed-size.
    pub offset: Option<usize>,
    /// Variable-size and not last: its end is recorded as a framing offset.
    pub framed: bool,
}

/// A lone struct is unwrapped so its members are placed; anything else is
/// placed as a sequence.
pub fn members_of(sequence: &[TypeNode]) -> &[TypeNode] {
    match sequence {
        [TypeNode::Struct(members)] => members.as_slice(),
        members => members,
    }
}

pub fn place_members(members: &[TypeNode]) -> Vec<MemberPlacement> {
    let mut end = Some(0);
    let last = members.len().saturating_sub(1);

    members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let layout = Layout::of_type(member);
            let offset = end.map(|end| round_up(end, layout.alignment));
            end = offset.zip(layout.size).map(|(offset, size)| offset + size);

            MemberPlacement {
                signature: member.signature(),
                layout,
                offset,
                framed: !layout.is_fixed() && index != last,
            }
        })
        .collect()
}
